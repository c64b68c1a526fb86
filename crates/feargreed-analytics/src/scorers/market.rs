//! 스칼라 시장 지표 채점기.

use feargreed_core::{Indicator, SubScore};

use super::score_value;

/// VIX 수준. `[10, 45]` 역방향 (낮을수록 탐욕).
pub fn score_vix(level: f64) -> SubScore {
    score_value(Indicator::Vix, level)
}

/// Put/Call 비율. `[0.7, 1.2]` 역방향.
pub fn score_put_call(ratio: f64) -> SubScore {
    score_value(Indicator::PutCall, ratio)
}

/// 하이일드 스프레드(%). `[2, 8]` 역방향.
pub fn score_junk(spread: f64) -> SubScore {
    score_value(Indicator::Junk, spread)
}

/// 10년물 국채 금리(%). `[1, 5]` 정방향.
pub fn score_economic(yield_10y: f64) -> SubScore {
    score_value(Indicator::Economic, yield_10y)
}

/// VIX 점수와 Put/Call 점수의 정수 평균.
///
/// 두 구성요소 중 낮은 품질을 따릅니다.
pub fn score_sentiment(vix: f64, put_call: f64) -> SubScore {
    let vix = score_vix(vix);
    let put_call = score_put_call(put_call);

    let average = (u16::from(vix.value) + u16::from(put_call.value)) / 2;
    SubScore::observed(average as u8).degrade(vix.quality.worst(put_call.quality))
}
