//! 하위 지표 채점기.
//!
//! 13개 채점기는 모두 순수 함수이며 어떤 실수 입력에도 `[0, 100]` 점수를
//! 반환합니다. 계산할 수 없는 경우는 에러 대신 중립 점수(50)와 품질 표시로
//! 대체합니다.
//!
//! | 모듈 | 지표 |
//! |---|---|
//! | [`market`] | VIX, Put/Call, 정크본드, 경제(10년물), 심리 |
//! | [`price`] | 모멘텀, 변동성, 기술적, 시장 폭 |
//! | [`cross_asset`] | 상관관계, 글로벌, 안전자산, 거래량 |

pub mod cross_asset;
pub mod market;
pub mod price;

use feargreed_core::domain::scoring::scale_for;
use feargreed_core::{Indicator, ScoreQuality, SubScore};

use crate::indicators::{IndicatorError, IndicatorResult};

pub use cross_asset::{score_correlation, score_global, score_safe_haven, score_volume};
pub use market::{score_economic, score_junk, score_put_call, score_sentiment, score_vix};
pub use price::{score_breadth, score_momentum, score_technical, score_volatility};

/// 지표의 고정 범위로 원시값을 채점합니다. NaN은 중립 점수.
pub fn score_value(indicator: Indicator, value: f64) -> SubScore {
    match scale_for(indicator, value) {
        Some(score) => SubScore::observed(score),
        None => SubScore::neutral(ScoreQuality::Degenerate),
    }
}

/// 지표 계산 결과를 채점합니다.
///
/// 데이터 부족은 `InsufficientHistory`, 그 외 에러는 `Degenerate` 중립 점수가 됩니다.
pub fn score_measure(indicator: Indicator, measure: IndicatorResult<f64>) -> SubScore {
    match measure {
        Ok(value) => score_value(indicator, value),
        Err(IndicatorError::InsufficientData { .. }) => {
            SubScore::neutral(ScoreQuality::InsufficientHistory)
        }
        Err(_) => SubScore::neutral(ScoreQuality::Degenerate),
    }
}

/// 최소 이력 길이를 채우지 못하면 중립 점수.
fn require_history(indicator: Indicator, len: usize) -> Option<SubScore> {
    (len < indicator.spec().min_history)
        .then(|| SubScore::neutral(ScoreQuality::InsufficientHistory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use feargreed_core::NEUTRAL_SCORE;

    #[test]
    fn test_score_measure_maps_errors() {
        let short = score_measure(
            Indicator::Volatility,
            Err(IndicatorError::InsufficientData {
                required: 20,
                provided: 3,
            }),
        );
        assert_eq!(short.value, NEUTRAL_SCORE);
        assert_eq!(short.quality, ScoreQuality::InsufficientHistory);

        let broken = score_measure(
            Indicator::Volatility,
            Err(IndicatorError::Degenerate("nan".into())),
        );
        assert_eq!(broken.value, NEUTRAL_SCORE);
        assert_eq!(broken.quality, ScoreQuality::Degenerate);
    }

    #[test]
    fn test_score_value_nan_is_neutral() {
        let score = score_value(Indicator::Vix, f64::NAN);
        assert_eq!(score, SubScore::neutral(ScoreQuality::Degenerate));
    }

    #[test]
    fn test_require_history() {
        assert!(require_history(Indicator::Momentum, 124).is_some());
        assert!(require_history(Indicator::Momentum, 125).is_none());
        assert!(require_history(Indicator::Vix, 0).is_none());
    }
}
