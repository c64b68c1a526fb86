//! 자산 간 상관관계 및 수익률 계산.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{mean, IndicatorError, IndicatorResult};

/// 두 시계열의 Pearson 상관계수.
///
/// 길이가 다르거나 2개 미만이거나 한쪽의 분산이 0이면 `None`.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let (cov, var_x, var_y) = x.iter().zip(y).fold((0.0, 0.0, 0.0), |acc, (xi, yi)| {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        (acc.0 + dx * dy, acc.1 + dx * dx, acc.2 + dy * dy)
    });

    // 변동 없음
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    let r = cov / (var_x.sqrt() * var_y.sqrt());
    r.is_finite().then_some(r)
}

/// 날짜가 붙은 종가를 날짜별 일간 수익률로 변환.
///
/// 수익률은 해당 날짜(뒤쪽 관측일)에 기록됩니다. 이전 종가가 0인 날은 제외합니다.
pub fn dated_returns(closes: &[(NaiveDate, f64)]) -> BTreeMap<NaiveDate, f64> {
    closes
        .windows(2)
        .filter(|w| w[0].1 != 0.0)
        .map(|w| (w[1].0, (w[1].1 - w[0].1) / w[0].1))
        .collect()
}

/// 모든 시계열에 공통으로 존재하는 날짜의 수익률만 남김.
///
/// 반환값은 입력 순서대로의 열(column)이며 모두 길이가 같습니다.
pub fn align_returns(series: &[&BTreeMap<NaiveDate, f64>]) -> Vec<Vec<f64>> {
    let Some((first, rest)) = series.split_first() else {
        return Vec::new();
    };

    let common: Vec<NaiveDate> = first
        .keys()
        .filter(|date| rest.iter().all(|other| other.contains_key(date)))
        .copied()
        .collect();

    series
        .iter()
        .map(|map| common.iter().filter_map(|date| map.get(date).copied()).collect())
        .collect()
}

/// 주식-금, 주식-채권 수익률 상관계수의 평균.
///
/// # 에러
/// - 공통 관측일이 `min_overlap`개 미만이면 `InsufficientData`
/// - 어느 한 자산의 수익률 분산이 0이면 `Degenerate`
pub fn cross_asset_correlation(
    equity: &[(NaiveDate, f64)],
    gold: &[(NaiveDate, f64)],
    bonds: &[(NaiveDate, f64)],
    min_overlap: usize,
) -> IndicatorResult<f64> {
    let equity = dated_returns(equity);
    let gold = dated_returns(gold);
    let bonds = dated_returns(bonds);

    let aligned = align_returns(&[&equity, &gold, &bonds]);
    let overlap = aligned.first().map_or(0, Vec::len);

    if overlap < min_overlap {
        return Err(IndicatorError::InsufficientData {
            required: min_overlap,
            provided: overlap,
        });
    }

    let eq_gold = pearson_correlation(&aligned[0], &aligned[1]);
    let eq_bonds = pearson_correlation(&aligned[0], &aligned[2]);

    match (eq_gold, eq_bonds) {
        (Some(a), Some(b)) => Ok((a + b) / 2.0),
        _ => Err(IndicatorError::Degenerate(
            "수익률 분산이 0인 자산이 있습니다".to_string(),
        )),
    }
}

/// 첫 값 대비 마지막 값의 수익률 `last / first − 1`.
///
/// 2개 미만이거나 첫 값이 0이면 `None`.
pub fn period_return(series: &[f64]) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    let first = *series.first()?;
    let last = *series.last()?;
    if first == 0.0 {
        return None;
    }
    Some(last / first - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_OVERLAP: usize = 10;

    fn dated(values: &[f64]) -> Vec<(NaiveDate, f64)> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (start + chrono::Days::new(i as u64), *v))
            .collect()
    }

    fn zigzag(n: usize, amplitude: f64) -> Vec<f64> {
        let mut prices = vec![100.0];
        for i in 0..n {
            let last = *prices.last().unwrap();
            let step = if i % 3 == 0 { 1.0 + amplitude } else { 1.0 - amplitude / 2.0 };
            prices.push(last * step);
        }
        prices
    }

    #[test]
    fn test_perfect_correlation() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
        let r = pearson_correlation(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_negative_correlation() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![10.0, 8.0, 6.0, 4.0, 2.0];
        let r = pearson_correlation(&x, &y).unwrap();
        assert!((r + 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_variance_is_none() {
        assert_eq!(pearson_correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), None);
        assert_eq!(pearson_correlation(&[1.0, 2.0], &[1.0]), None);
    }

    #[test]
    fn test_align_returns_intersects_dates() {
        let a = dated_returns(&dated(&[100.0, 101.0, 102.0, 103.0]));
        let mut b = a.clone();
        let dropped = *b.keys().nth(1).unwrap();
        b.remove(&dropped);

        let aligned = align_returns(&[&a, &b]);
        assert_eq!(aligned.len(), 2);
        assert_eq!(aligned[0].len(), 2);
        assert_eq!(aligned[1].len(), 2);
    }

    #[test]
    fn test_cross_asset_identical_series() {
        let prices = dated(&zigzag(30, 0.02));
        let r = cross_asset_correlation(&prices, &prices, &prices, MIN_OVERLAP).unwrap();
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cross_asset_insufficient_overlap() {
        let prices = dated(&zigzag(5, 0.02));
        assert!(matches!(
            cross_asset_correlation(&prices, &prices, &prices, MIN_OVERLAP),
            Err(IndicatorError::InsufficientData { required: 10, .. })
        ));
        assert!(matches!(
            cross_asset_correlation(&[], &prices, &prices, MIN_OVERLAP),
            Err(IndicatorError::InsufficientData { provided: 0, .. })
        ));
    }

    #[test]
    fn test_cross_asset_flat_asset_is_degenerate() {
        let equity = dated(&zigzag(30, 0.02));
        let flat = dated(&[100.0; 31]);
        assert!(matches!(
            cross_asset_correlation(&equity, &flat, &equity, MIN_OVERLAP),
            Err(IndicatorError::Degenerate(_))
        ));
    }

    #[test]
    fn test_period_return() {
        assert!((period_return(&[100.0, 95.0, 110.0]).unwrap() - 0.1).abs() < 1e-12);
        assert_eq!(period_return(&[100.0]), None);
        assert_eq!(period_return(&[0.0, 1.0]), None);
    }
}
