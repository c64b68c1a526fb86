//! 일간 스냅샷.
//!
//! 한 번의 실행마다 하나 생성되며 영속화 계층이 통째로 기록합니다.
//! 필드 이름과 중첩 구조는 외부 소비자와의 계약이므로 바꾸지 않습니다.
//!
//! ```json
//! {
//!   "asOf": "2025-05-12",
//!   "metrics": { "vix": 18.2, "currentSP": 5650.1, ... },
//!   "scores": { "vixScore": 77, ..., "finalScore": 61 }
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::indicator::Indicator;
use super::score::ScoreCard;

/// 채점에 사용된 원시·파생 지표값.
///
/// `None`은 JSON에서 `null`이며 "계산되지 않음"을 뜻합니다.
/// 유한하지 않은 관측값(NaN, 무한대)도 `None`으로 기록합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketMetrics {
    pub vix: Option<f64>,
    #[serde(rename = "currentSP")]
    pub current_sp: Option<f64>,
    pub ma125: Option<f64>,
    #[serde(rename = "bond10Y")]
    pub bond_10y: Option<f64>,
    pub put_call: Option<f64>,
    pub junk_spread: Option<f64>,
    pub sp_high: Option<f64>,
    pub sp_low: Option<f64>,
    /// 달러 인덱스 (데이터 소스 없음)
    pub usd_dxy: Option<f64>,
    /// 연환산 실현 변동성
    pub volatility: Option<f64>,
    /// 주식 대 금·채권 평균 상관계수
    pub correlation: Option<f64>,
    pub sentiment: f64,
    pub technical: f64,
    pub economic: f64,
    pub global: f64,
}

/// 하위 점수와 최종 점수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSheet {
    pub vix_score: u8,
    pub momentum_score: u8,
    pub safe_haven_score: u8,
    pub put_call_score: u8,
    pub junk_score: u8,
    pub breadth_score: u8,
    pub volume_score: u8,
    pub volatility_score: u8,
    pub correlation_score: u8,
    pub sentiment_score: u8,
    pub technical_score: u8,
    pub economic_score: u8,
    pub global_score: u8,
    pub final_score: u8,
}

impl ScoreSheet {
    pub fn from_card(card: &ScoreCard, final_score: u8) -> Self {
        Self {
            vix_score: card.value(Indicator::Vix),
            momentum_score: card.value(Indicator::Momentum),
            safe_haven_score: card.value(Indicator::SafeHaven),
            put_call_score: card.value(Indicator::PutCall),
            junk_score: card.value(Indicator::Junk),
            breadth_score: card.value(Indicator::Breadth),
            volume_score: card.value(Indicator::Volume),
            volatility_score: card.value(Indicator::Volatility),
            correlation_score: card.value(Indicator::Correlation),
            sentiment_score: card.value(Indicator::Sentiment),
            technical_score: card.value(Indicator::Technical),
            economic_score: card.value(Indicator::Economic),
            global_score: card.value(Indicator::Global),
            final_score,
        }
    }

    pub fn value(&self, indicator: Indicator) -> u8 {
        match indicator {
            Indicator::Vix => self.vix_score,
            Indicator::Momentum => self.momentum_score,
            Indicator::SafeHaven => self.safe_haven_score,
            Indicator::PutCall => self.put_call_score,
            Indicator::Junk => self.junk_score,
            Indicator::Breadth => self.breadth_score,
            Indicator::Volume => self.volume_score,
            Indicator::Volatility => self.volatility_score,
            Indicator::Correlation => self.correlation_score,
            Indicator::Sentiment => self.sentiment_score,
            Indicator::Technical => self.technical_score,
            Indicator::Economic => self.economic_score,
            Indicator::Global => self.global_score,
        }
    }
}

/// 하루치 공포·탐욕 지수 기록.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub as_of: NaiveDate,
    pub metrics: MarketMetrics,
    pub scores: ScoreSheet,
}

impl Snapshot {
    pub fn final_score(&self) -> u8 {
        self.scores.final_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::score::SubScore;

    fn sample_metrics() -> MarketMetrics {
        MarketMetrics {
            vix: Some(18.5),
            current_sp: Some(5600.0),
            ma125: Some(5400.0),
            bond_10y: Some(4.2),
            put_call: Some(0.95),
            junk_spread: Some(3.5),
            sp_high: Some(5700.0),
            sp_low: Some(4900.0),
            usd_dxy: None,
            volatility: Some(0.16),
            correlation: None,
            sentiment: 0.5,
            technical: 0.75,
            economic: 0.8,
            global: 0.6,
        }
    }

    #[test]
    fn test_snapshot_json_contract() {
        let card = ScoreCard::from_fn(|i| SubScore::observed(i.index() as u8 * 5));
        let snapshot = Snapshot {
            as_of: NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(),
            metrics: sample_metrics(),
            scores: ScoreSheet::from_card(&card, 42),
        };

        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["asOf"], "2025-05-12");
        assert_eq!(json["metrics"]["currentSP"], 5600.0);
        assert_eq!(json["metrics"]["bond10Y"], 4.2);
        assert_eq!(json["metrics"]["junkSpread"], 3.5);
        assert!(json["metrics"]["usdDxy"].is_null());
        assert!(json["metrics"]["correlation"].is_null());
        assert_eq!(json["scores"]["vixScore"], 0);
        assert_eq!(json["scores"]["safeHavenScore"], 10);
        assert_eq!(json["scores"]["globalScore"], 60);
        assert_eq!(json["scores"]["finalScore"], 42);

        let scores = json["scores"].as_object().unwrap();
        assert_eq!(scores.len(), Indicator::COUNT + 1);
        for indicator in Indicator::ALL {
            assert!(scores.contains_key(indicator.score_key()), "{}", indicator);
        }
    }

    #[test]
    fn test_score_sheet_value_matches_card() {
        let card = ScoreCard::from_fn(|i| SubScore::observed(100 - i.index() as u8));
        let sheet = ScoreSheet::from_card(&card, 0);
        for indicator in Indicator::ALL {
            assert_eq!(sheet.value(indicator), card.value(indicator));
        }
    }
}
