//! 모멘텀 지표 (Momentum Indicators).
//!
//! - RSI (Relative Strength Index)

use serde::{Deserialize, Serialize};

use super::{IndicatorError, IndicatorResult};

/// RSI 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RsiParams {
    /// RSI 기간 (기본: 14).
    pub period: usize,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

/// 마지막 시점의 RSI 계산.
///
/// RSI = 100 − (100 / (1 + RS)),  RS = 평균 상승폭 / 평균 하락폭
///
/// 최근 `period`개 가격 변화의 단순 평균을 사용합니다.
/// 평균 하락폭이 0이면 RSI는 100입니다.
///
/// # 반환
/// 0-100 사이의 RSI 값 (입력에 NaN이 있으면 NaN)
pub fn rsi(prices: &[f64], params: RsiParams) -> IndicatorResult<f64> {
    let period = params.period;

    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "기간은 0보다 커야 합니다".to_string(),
        ));
    }

    if prices.len() < period + 1 {
        return Err(IndicatorError::InsufficientData {
            required: period + 1,
            provided: prices.len(),
        });
    }

    let window = &prices[prices.len() - (period + 1)..];
    let (gain_sum, loss_sum) = window
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold((0.0, 0.0), |(gain, loss), delta| {
            if delta > 0.0 {
                (gain + delta, loss)
            } else {
                (gain, loss - delta)
            }
        });

    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    if avg_loss == 0.0 {
        return Ok(100.0);
    }

    let rs = avg_gain / avg_loss;
    Ok(100.0 - 100.0 / (1.0 + rs))
}
