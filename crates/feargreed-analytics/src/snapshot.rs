//! 스냅샷 조립.
//!
//! 계산은 하지 않고 관측값·파생값·점수를 [`Snapshot`] 형태로 옮기기만 합니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use feargreed_core::{
    Indicator, MarketMetrics, MarketObservation, PriceHistory, ScoreCard, ScoreSheet, Snapshot,
};

use crate::indicators::{moving_average, rolling_std};

/// 이동평균 기간.
const MA_WINDOW: usize = 125;

/// 주가 시계열에서 얻은 파생 지표.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub current_sp: f64,
    /// 최근 최대 125개 종가의 평균
    pub ma125: f64,
    pub sp_high: f64,
    pub sp_low: f64,
    /// 전체 구간의 연환산 변동성
    pub volatility: Option<f64>,
    /// 주식-금·채권 평균 상관계수
    pub correlation: Option<f64>,
}

impl DerivedMetrics {
    /// 주가 이력에서 파생값을 계산합니다. 이력이 비었으면 `None`.
    pub fn from_equity(equity: &PriceHistory, correlation: Option<f64>) -> Option<Self> {
        let current_sp = equity.last_close()?;
        let closes = equity.closes();

        let ma125 = moving_average(&closes, closes.len().min(MA_WINDOW)).unwrap_or(current_sp);

        Some(Self {
            current_sp,
            ma125,
            sp_high: equity.period_high().unwrap_or(current_sp),
            sp_low: equity.period_low().unwrap_or(current_sp),
            volatility: rolling_std(&closes).ok(),
            correlation,
        })
    }
}

/// 한 번의 실행 결과를 스냅샷으로 묶습니다.
///
/// 심리·기술적·경제·글로벌 지표값은 해당 점수 / 100 입니다.
/// 달러 인덱스는 수집하지 않으므로 항상 `None`.
/// 유한하지 않은 원시값은 `None`으로 옮겨 JSON 숫자 계약을 지킵니다.
pub fn assemble_snapshot(
    as_of: NaiveDate,
    observation: &MarketObservation,
    derived: &DerivedMetrics,
    card: &ScoreCard,
    final_score: u8,
) -> Snapshot {
    let ratio = |indicator: Indicator| f64::from(card.value(indicator)) / 100.0;

    let metrics = MarketMetrics {
        vix: finite(observation.vix.value),
        current_sp: finite(derived.current_sp),
        ma125: finite(derived.ma125),
        bond_10y: finite(observation.bond_10y.value),
        put_call: finite(observation.put_call.value),
        junk_spread: finite(observation.junk_spread.value),
        sp_high: finite(derived.sp_high),
        sp_low: finite(derived.sp_low),
        usd_dxy: None,
        volatility: derived.volatility.and_then(finite),
        correlation: derived.correlation.and_then(finite),
        sentiment: ratio(Indicator::Sentiment),
        technical: ratio(Indicator::Technical),
        economic: ratio(Indicator::Economic),
        global: ratio(Indicator::Global),
    };

    Snapshot {
        as_of,
        metrics,
        scores: ScoreSheet::from_card(card, final_score),
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use feargreed_core::{DailyBar, FetchOutcome, Reading};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn bar(d: u32, close: f64, high: f64, low: f64) -> DailyBar {
        DailyBar {
            date: day(d),
            open: close,
            high,
            low,
            close,
            volume: 1_000.0,
        }
    }

    fn observation() -> MarketObservation {
        MarketObservation {
            vix: Reading::live(18.0),
            equity: FetchOutcome::unavailable("unused"),
            bond_10y: Reading::fallback(4.0),
            put_call: Reading::live(0.9),
            junk_spread: Reading::live(3.2),
            volume_window: FetchOutcome::unavailable("unused"),
            cross_asset: FetchOutcome::unavailable("unused"),
            regional: FetchOutcome::unavailable("unused"),
            safe_haven: FetchOutcome::unavailable("unused"),
        }
    }

    #[test]
    fn test_derived_from_short_history() {
        let equity = PriceHistory::new(
            "^GSPC",
            vec![bar(2, 100.0, 105.0, 95.0), bar(3, 110.0, 112.0, 99.0)],
        );
        let derived = DerivedMetrics::from_equity(&equity, None).unwrap();

        assert_eq!(derived.current_sp, 110.0);
        assert_eq!(derived.ma125, 105.0);
        assert_eq!(derived.sp_high, 112.0);
        assert_eq!(derived.sp_low, 95.0);
        // 변화율 1개로는 표본 표준편차 불가
        assert_eq!(derived.volatility, None);
    }

    #[test]
    fn test_derived_from_empty_history() {
        let equity = PriceHistory::new("^GSPC", Vec::new());
        assert!(DerivedMetrics::from_equity(&equity, None).is_none());
    }

    #[test]
    fn test_assemble_is_projection() {
        let derived = DerivedMetrics {
            current_sp: 5000.0,
            ma125: 4900.0,
            sp_high: 5100.0,
            sp_low: 4500.0,
            volatility: Some(0.18),
            correlation: None,
        };
        let card = ScoreCard::uniform(64);

        let snapshot = assemble_snapshot(day(15), &observation(), &derived, &card, 64);

        assert_eq!(snapshot.as_of, day(15));
        assert_eq!(snapshot.metrics.vix, Some(18.0));
        assert_eq!(snapshot.metrics.bond_10y, Some(4.0));
        assert_eq!(snapshot.metrics.usd_dxy, None);
        assert_eq!(snapshot.metrics.correlation, None);
        assert_eq!(snapshot.metrics.sentiment, 0.64);
        assert_eq!(snapshot.scores.vix_score, 64);
        assert_eq!(snapshot.final_score(), 64);
    }

    #[test]
    fn test_non_finite_raw_values_become_null() {
        let derived = DerivedMetrics {
            current_sp: f64::NAN,
            ma125: 4900.0,
            sp_high: f64::INFINITY,
            sp_low: 4500.0,
            volatility: Some(f64::NAN),
            correlation: None,
        };
        let mut obs = observation();
        obs.vix = Reading::live(f64::NAN);

        let snapshot = assemble_snapshot(day(15), &obs, &derived, &ScoreCard::uniform(50), 50);

        assert_eq!(snapshot.metrics.vix, None);
        assert_eq!(snapshot.metrics.current_sp, None);
        assert_eq!(snapshot.metrics.sp_high, None);
        assert_eq!(snapshot.metrics.volatility, None);
        assert_eq!(snapshot.metrics.ma125, Some(4900.0));
        assert_eq!(snapshot.metrics.put_call, Some(0.9));
    }
}
