//! 주가 시계열 기반 채점기.
//!
//! 입력은 시간순 종가입니다.

use feargreed_core::{ClampRange, Indicator, ScoreQuality, SubScore};

use super::{require_history, score_measure};
use crate::indicators::{
    macd, moving_average, rolling_std, rsi, IndicatorError, MacdParams, RsiParams,
};

/// 125일 이동평균 대비 괴리율 `(last − MA) / MA`. `[-0.1, 0.1]` 정방향.
///
/// 125개 미만이면 50.
pub fn score_momentum(closes: &[f64]) -> SubScore {
    let indicator = Indicator::Momentum;
    if let Some(short) = require_history(indicator, closes.len()) {
        return short;
    }

    let window = indicator.spec().min_history;
    let momentum = moving_average(closes, window).and_then(|ma| {
        let last = closes[closes.len() - 1];
        if ma == 0.0 {
            return Err(IndicatorError::Degenerate("이동평균이 0입니다".to_string()));
        }
        Ok((last - ma) / ma)
    });

    score_measure(indicator, momentum)
}

/// 연환산 실현 변동성. `[0.10, 0.40]` 역방향.
///
/// 20개 미만이면 50.
pub fn score_volatility(closes: &[f64]) -> SubScore {
    let indicator = Indicator::Volatility;
    if let Some(short) = require_history(indicator, closes.len()) {
        return short;
    }

    score_measure(indicator, rolling_std(closes))
}

/// RSI 점수와 MACD 부호 점수의 정수 평균.
///
/// - RSI: `[30, 70]` 정방향
/// - MACD: 양수면 100, 아니면 0
///
/// 26개 미만이면 50.
pub fn score_technical(closes: &[f64]) -> SubScore {
    let indicator = Indicator::Technical;
    if let Some(short) = require_history(indicator, closes.len()) {
        return short;
    }

    let rsi_score = score_measure(indicator, rsi(closes, RsiParams::default()));

    let macd_score = match macd(closes, MacdParams::default()) {
        Ok(value) if value.is_nan() => SubScore::neutral(ScoreQuality::Degenerate),
        Ok(value) if value > 0.0 => SubScore::observed(100),
        Ok(_) => SubScore::observed(0),
        Err(_) => SubScore::neutral(ScoreQuality::Degenerate),
    };

    let average = (u16::from(rsi_score.value) + u16::from(macd_score.value)) / 2;
    SubScore::observed(average as u8).degrade(rsi_score.quality.worst(macd_score.quality))
}

/// 기간 고점·저점 사이에서 현재가의 위치. 정방향.
///
/// 고점이 저점보다 크지 않으면 50.
pub fn score_breadth(current: f64, high: f64, low: f64) -> SubScore {
    if !(high > low) {
        return SubScore::neutral(ScoreQuality::Degenerate);
    }

    match ClampRange::direct(low, high).scale(current) {
        Some(score) => SubScore::observed(score),
        None => SubScore::neutral(ScoreQuality::Degenerate),
    }
}
