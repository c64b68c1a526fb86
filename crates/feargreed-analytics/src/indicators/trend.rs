//! 추세 지표 (Trend Indicators).
//!
//! - 이동평균 (Moving Average)
//! - EMA (Exponential Moving Average)
//! - MACD (Moving Average Convergence Divergence)

use serde::{Deserialize, Serialize};

use super::{IndicatorError, IndicatorResult};

/// MACD 파라미터.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacdParams {
    /// 단기 EMA 기간 (기본: 12).
    pub fast_period: usize,
    /// 장기 EMA 기간 (기본: 26).
    pub slow_period: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
        }
    }
}

/// 마지막 `window`개 값의 평균.
///
/// # 에러
/// - `window`가 0이면 `InvalidParameter`
/// - 데이터가 `window`보다 짧으면 `InsufficientData`
pub fn moving_average(series: &[f64], window: usize) -> IndicatorResult<f64> {
    if window == 0 {
        return Err(IndicatorError::InvalidParameter(
            "기간은 0보다 커야 합니다".to_string(),
        ));
    }

    if series.len() < window {
        return Err(IndicatorError::InsufficientData {
            required: window,
            provided: series.len(),
        });
    }

    let tail = &series[series.len() - window..];
    Ok(tail.iter().sum::<f64>() / window as f64)
}

/// 지수 이동평균 (EMA) 계산.
///
/// EMA = (현재가 × α) + (이전 EMA × (1 − α)),  α = 2 / (span + 1)
///
/// 첫 EMA는 첫 관측값입니다.
///
/// # 반환
/// 입력과 같은 길이의 EMA 값들
pub fn ema(series: &[f64], span: usize) -> IndicatorResult<Vec<f64>> {
    if span == 0 {
        return Err(IndicatorError::InvalidParameter(
            "span은 0보다 커야 합니다".to_string(),
        ));
    }

    let Some(&first) = series.first() else {
        return Err(IndicatorError::InsufficientData {
            required: 1,
            provided: 0,
        });
    };

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut result = Vec::with_capacity(series.len());
    let mut prev = first;
    result.push(prev);

    for &price in &series[1..] {
        prev = price * alpha + prev * (1.0 - alpha);
        result.push(prev);
    }

    Ok(result)
}

/// 마지막 시점의 MACD 라인 (단기 EMA − 장기 EMA).
///
/// 장기 기간보다 짧은 시계열은 `InsufficientData`.
pub fn macd(series: &[f64], params: MacdParams) -> IndicatorResult<f64> {
    if params.fast_period >= params.slow_period {
        return Err(IndicatorError::InvalidParameter(format!(
            "단기 기간({})은 장기 기간({})보다 짧아야 합니다",
            params.fast_period, params.slow_period
        )));
    }

    if series.len() < params.slow_period {
        return Err(IndicatorError::InsufficientData {
            required: params.slow_period,
            provided: series.len(),
        });
    }

    let fast = ema(series, params.fast_period)?;
    let slow = ema(series, params.slow_period)?;

    match (fast.last(), slow.last()) {
        (Some(f), Some(s)) => Ok(f - s),
        _ => Err(IndicatorError::Degenerate("EMA 결과 없음".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_average_trailing_window() {
        let prices = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(moving_average(&prices, 3).unwrap(), 5.0);
        assert_eq!(moving_average(&prices, 6).unwrap(), 3.5);
    }

    #[test]
    fn test_moving_average_insufficient() {
        let prices = vec![1.0, 2.0];
        assert_eq!(
            moving_average(&prices, 5),
            Err(IndicatorError::InsufficientData {
                required: 5,
                provided: 2
            })
        );
        assert!(matches!(
            moving_average(&prices, 0),
            Err(IndicatorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_ema_seeded_with_first() {
        let prices = vec![10.0, 20.0, 20.0];
        let values = ema(&prices, 3).unwrap();

        // α = 0.5
        assert_eq!(values[0], 10.0);
        assert_eq!(values[1], 15.0);
        assert_eq!(values[2], 17.5);
    }

    #[test]
    fn test_ema_constant_series() {
        let prices = vec![42.0; 50];
        let values = ema(&prices, 12).unwrap();
        assert!(values.iter().all(|v| (*v - 42.0).abs() < 1e-12));
    }

    #[test]
    fn test_macd_sign_follows_trend() {
        let rising: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        assert!(macd(&rising, MacdParams::default()).unwrap() > 0.0);

        let falling: Vec<f64> = (0..60).map(|i| 200.0 - i as f64).collect();
        assert!(macd(&falling, MacdParams::default()).unwrap() < 0.0);
    }

    #[test]
    fn test_macd_insufficient() {
        let prices = vec![100.0; 25];
        assert!(matches!(
            macd(&prices, MacdParams::default()),
            Err(IndicatorError::InsufficientData { required: 26, .. })
        ));
    }
}
