//! 하위 점수와 점수표.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::indicator::Indicator;
use super::scoring::NEUTRAL_SCORE;

/// 하위 점수의 신뢰 수준.
///
/// JSON 스냅샷에는 기록되지 않으며 로그와 CLI 출력에만 사용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreQuality {
    /// 실제 관측값으로 계산
    Observed,
    /// 조회 실패 또는 대체값 입력
    Fallback,
    /// 데이터 길이 부족 (콜드 스타트)
    InsufficientHistory,
    /// 0으로 나누기·NaN 등 계산 불가
    Degenerate,
}

impl ScoreQuality {
    /// 두 품질 중 더 낮은 쪽.
    pub fn worst(self, other: Self) -> Self {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }

    fn rank(self) -> u8 {
        match self {
            Self::Observed => 0,
            Self::Fallback => 1,
            Self::InsufficientHistory => 2,
            Self::Degenerate => 3,
        }
    }
}

impl fmt::Display for ScoreQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Observed => "observed",
            Self::Fallback => "fallback",
            Self::InsufficientHistory => "insufficient_history",
            Self::Degenerate => "degenerate",
        };
        f.write_str(label)
    }
}

/// `[0, 100]` 하위 점수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScore {
    pub value: u8,
    pub quality: ScoreQuality,
}

impl SubScore {
    /// 관측값으로 계산된 점수. 100을 넘으면 100으로 자릅니다.
    pub fn observed(value: u8) -> Self {
        Self {
            value: value.min(100),
            quality: ScoreQuality::Observed,
        }
    }

    /// 중립 점수(50).
    pub fn neutral(quality: ScoreQuality) -> Self {
        Self {
            value: NEUTRAL_SCORE,
            quality,
        }
    }

    /// 값은 유지하고 품질만 낮춥니다.
    pub fn degrade(self, quality: ScoreQuality) -> Self {
        Self {
            value: self.value,
            quality: self.quality.worst(quality),
        }
    }

    pub fn is_neutral_fallback(&self) -> bool {
        self.quality != ScoreQuality::Observed && self.value == NEUTRAL_SCORE
    }
}

/// 13개 하위 점수 전체.
///
/// 배열 인덱스는 [`Indicator::index`]이므로 모든 지표가 항상 채워져 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    scores: [SubScore; Indicator::COUNT],
}

impl ScoreCard {
    pub fn new(scores: [SubScore; Indicator::COUNT]) -> Self {
        Self { scores }
    }

    /// 지표별 계산 함수로 점수표를 만듭니다.
    pub fn from_fn(mut f: impl FnMut(Indicator) -> SubScore) -> Self {
        Self {
            scores: std::array::from_fn(|i| f(Indicator::ALL[i])),
        }
    }

    /// 모든 지표에 같은 값을 넣습니다 (테스트용).
    pub fn uniform(value: u8) -> Self {
        Self::from_fn(|_| SubScore::observed(value))
    }

    pub fn get(&self, indicator: Indicator) -> SubScore {
        self.scores[indicator.index()]
    }

    pub fn value(&self, indicator: Indicator) -> u8 {
        self.get(indicator).value
    }

    pub fn iter(&self) -> impl Iterator<Item = (Indicator, SubScore)> + '_ {
        Indicator::ALL.iter().map(move |&i| (i, self.get(i)))
    }

    /// 실제 관측값이 아닌 점수의 개수.
    pub fn degraded_count(&self) -> usize {
        self.scores
            .iter()
            .filter(|s| s.quality != ScoreQuality::Observed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observed_clamps() {
        assert_eq!(SubScore::observed(150).value, 100);
        assert_eq!(SubScore::observed(42).quality, ScoreQuality::Observed);
    }

    #[test]
    fn test_neutral() {
        let score = SubScore::neutral(ScoreQuality::InsufficientHistory);
        assert_eq!(score.value, 50);
        assert!(score.is_neutral_fallback());
    }

    #[test]
    fn test_degrade_keeps_worst() {
        let score = SubScore::observed(70)
            .degrade(ScoreQuality::Degenerate)
            .degrade(ScoreQuality::Fallback);
        assert_eq!(score.value, 70);
        assert_eq!(score.quality, ScoreQuality::Degenerate);
    }

    #[test]
    fn test_card_from_fn_order() {
        let card = ScoreCard::from_fn(|i| SubScore::observed(i.index() as u8));
        assert_eq!(card.value(Indicator::Vix), 0);
        assert_eq!(card.value(Indicator::Global), 12);
        assert_eq!(card.iter().count(), Indicator::COUNT);
        assert_eq!(card.degraded_count(), 0);
    }
}
