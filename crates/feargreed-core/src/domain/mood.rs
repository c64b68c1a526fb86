//! 시장 심리 구간.
//!
//! 최종 점수(0~100)를 다섯 구간으로 나눕니다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 시장 심리 (Market Mood).
///
/// # 기준
///
/// - **ExtremeFear**: 0~19
/// - **Fear**: 20~44
/// - **Neutral**: 45~54
/// - **Greed**: 55~74
/// - **ExtremeGreed**: 75~100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentMood {
    /// 극도의 공포
    ///
    /// 대규모 매도와 높은 변동성. 반등의 기회가 되기도 합니다.
    ExtremeFear,

    /// 공포
    ///
    /// 위험 회피, 안전자산으로 자금 이동.
    Fear,

    /// 중립
    Neutral,

    /// 탐욕
    ///
    /// 위험 감수 경향, 자산 가격 상승.
    Greed,

    /// 극도의 탐욕
    ///
    /// 과도한 낙관, 과열 가능성.
    ExtremeGreed,
}

impl SentimentMood {
    /// 최종 점수로부터 심리 구간 판단.
    ///
    /// # Examples
    ///
    /// ```
    /// use feargreed_core::domain::SentimentMood;
    ///
    /// assert_eq!(SentimentMood::from_score(10), SentimentMood::ExtremeFear);
    /// assert_eq!(SentimentMood::from_score(50), SentimentMood::Neutral);
    /// assert_eq!(SentimentMood::from_score(90), SentimentMood::ExtremeGreed);
    /// ```
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => Self::ExtremeFear,
            20..=44 => Self::Fear,
            45..=54 => Self::Neutral,
            55..=74 => Self::Greed,
            _ => Self::ExtremeGreed,
        }
    }

    /// 영문 라벨.
    pub fn label(self) -> &'static str {
        match self {
            Self::ExtremeFear => "Extreme Fear",
            Self::Fear => "Fear",
            Self::Neutral => "Neutral",
            Self::Greed => "Greed",
            Self::ExtremeGreed => "Extreme Greed",
        }
    }

    /// 상황 설명.
    pub fn description(self) -> &'static str {
        match self {
            Self::ExtremeFear => "시장이 극도의 공포 상태입니다. 변동성이 매우 높고 매도가 집중되고 있습니다.",
            Self::Fear => "시장이 공포 상태입니다. 투자자들이 위험을 회피하고 안전자산을 선호합니다.",
            Self::Neutral => "시장이 중립 상태입니다. 극단적인 감정 없이 균형을 이루고 있습니다.",
            Self::Greed => "시장이 탐욕 상태입니다. 위험 감수 경향이 커지고 있습니다.",
            Self::ExtremeGreed => "시장이 극도의 탐욕 상태입니다. 과도한 낙관으로 과열 가능성이 있습니다.",
        }
    }

    /// 심리 구간에 대응하는 리스크 수준.
    pub fn risk_level(self) -> RiskLevel {
        match self {
            Self::ExtremeFear => RiskLevel::VeryLow,
            Self::Fear => RiskLevel::Low,
            Self::Neutral => RiskLevel::Medium,
            Self::Greed => RiskLevel::High,
            Self::ExtremeGreed => RiskLevel::VeryHigh,
        }
    }
}

impl fmt::Display for SentimentMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 신규 진입 리스크 수준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "매우 낮음",
            Self::Low => "낮음",
            Self::Medium => "보통",
            Self::High => "높음",
            Self::VeryHigh => "매우 높음",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(SentimentMood::from_score(0), SentimentMood::ExtremeFear);
        assert_eq!(SentimentMood::from_score(19), SentimentMood::ExtremeFear);
        assert_eq!(SentimentMood::from_score(20), SentimentMood::Fear);
        assert_eq!(SentimentMood::from_score(44), SentimentMood::Fear);
        assert_eq!(SentimentMood::from_score(45), SentimentMood::Neutral);
        assert_eq!(SentimentMood::from_score(54), SentimentMood::Neutral);
        assert_eq!(SentimentMood::from_score(55), SentimentMood::Greed);
        assert_eq!(SentimentMood::from_score(74), SentimentMood::Greed);
        assert_eq!(SentimentMood::from_score(75), SentimentMood::ExtremeGreed);
        assert_eq!(SentimentMood::from_score(100), SentimentMood::ExtremeGreed);
    }

    #[test]
    fn test_risk_level_follows_mood() {
        assert_eq!(SentimentMood::ExtremeFear.risk_level(), RiskLevel::VeryLow);
        assert_eq!(SentimentMood::ExtremeGreed.risk_level(), RiskLevel::VeryHigh);
        assert!(RiskLevel::Low < RiskLevel::High);
    }
}
