//! 변동성 지표 (Volatility Indicators).

use super::{mean, IndicatorError, IndicatorResult};

/// 연환산에 사용하는 연간 거래일 수.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// 연속된 두 값 사이의 변화율 `(p[i] − p[i−1]) / p[i−1]`.
///
/// 이전 값이 0인 쌍은 건너뜁니다.
pub fn percent_change(series: &[f64]) -> impl Iterator<Item = f64> + '_ {
    series
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
}

/// 일간 변화율의 표본 표준편차(n − 1)를 연환산한 값.
///
/// # 에러
/// - 변화율이 2개 미만이면 `InsufficientData`
/// - 결과가 유한하지 않으면 `Degenerate`
pub fn rolling_std(series: &[f64]) -> IndicatorResult<f64> {
    let returns: Vec<f64> = percent_change(series).collect();

    if returns.len() < 2 {
        return Err(IndicatorError::InsufficientData {
            required: 3,
            provided: series.len(),
        });
    }

    let avg = mean(&returns).unwrap_or(0.0);
    let variance = returns.iter().map(|r| (r - avg).powi(2)).sum::<f64>()
        / (returns.len() - 1) as f64;
    let annualized = variance.sqrt() * TRADING_DAYS_PER_YEAR.sqrt();

    if !annualized.is_finite() {
        return Err(IndicatorError::Degenerate(
            "변동성 값이 유한하지 않습니다".to_string(),
        ));
    }

    Ok(annualized)
}
