//! 관측값 수집기.
//!
//! 한 번의 실행에 필요한 모든 시계열과 스칼라 지표를 동시에 조회하여
//! [`MarketObservation`]으로 묶습니다. 조회 실패는 삼키지 않고
//! `FetchOutcome::Unavailable` 또는 대체값 `Reading`으로 기록하며,
//! 모든 실패는 경고 로그로 남깁니다.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use feargreed_core::{
    AppConfig, CrossAssetHistory, FallbackValues, FetchOutcome, MarketObservation, PriceHistory,
    Reading, RegionalHistory, SafeHavenHistory, SymbolConfig,
};
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::provider::{HistoryRange, MarketDataProvider, YahooMarketData};
use crate::sources::{SentimentFeed, SentimentSources};

type SeriesKey = (String, HistoryRange);

/// 시장 관측값 수집기.
pub struct ObservationCollector {
    market: Arc<dyn MarketDataProvider>,
    feed: Arc<dyn SentimentFeed>,
    symbols: SymbolConfig,
    fallbacks: FallbackValues,
}

impl ObservationCollector {
    pub fn new(
        market: Arc<dyn MarketDataProvider>,
        feed: Arc<dyn SentimentFeed>,
        symbols: SymbolConfig,
        fallbacks: FallbackValues,
    ) -> Self {
        Self {
            market,
            feed,
            symbols,
            fallbacks,
        }
    }

    /// Yahoo Finance와 CBOE/FRED 소스로 수집기 생성.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(
            Arc::new(YahooMarketData::new()?),
            Arc::new(SentimentSources::new(&config.sources)?),
            config.symbols.clone(),
            config.fallbacks,
        ))
    }

    /// 모든 입력을 동시에 조회합니다.
    ///
    /// 실패하지 않습니다. 주 지수 시계열이 없는지는 엔진이 판단합니다.
    pub async fn collect(&self) -> MarketObservation {
        let s = &self.symbols;
        let requests = [
            (s.equity.as_str(), HistoryRange::SixMonths),
            (s.equity.as_str(), HistoryRange::OneMonth),
            (s.gold.as_str(), HistoryRange::OneMonth),
            (s.ten_year.as_str(), HistoryRange::OneMonth),
            (s.europe.as_str(), HistoryRange::OneMonth),
            (s.asia.as_str(), HistoryRange::OneMonth),
            (s.equity.as_str(), HistoryRange::ThreeMonths),
            (s.long_bond.as_str(), HistoryRange::ThreeMonths),
        ];

        let (mut series, vix, bond_10y, put_call, junk_spread) = tokio::join!(
            self.fetch_series(&requests),
            self.market.latest_close(&s.vix),
            self.market.latest_close(&s.ten_year),
            self.feed.put_call_ratio(),
            self.feed.junk_spread(),
        );

        let mut take = |symbol: &str, range: HistoryRange| {
            series
                .remove(&(symbol.to_string(), range))
                .unwrap_or_else(|| FetchOutcome::unavailable(format!("{} 요청 누락", symbol)))
        };

        let equity = take(&s.equity, HistoryRange::SixMonths);
        let equity_month = take(&s.equity, HistoryRange::OneMonth);
        let gold = take(&s.gold, HistoryRange::OneMonth);
        let bonds = take(&s.ten_year, HistoryRange::OneMonth);
        let europe = take(&s.europe, HistoryRange::OneMonth);
        let asia = take(&s.asia, HistoryRange::OneMonth);
        let equity_quarter = take(&s.equity, HistoryRange::ThreeMonths);
        let long_bond = take(&s.long_bond, HistoryRange::ThreeMonths);

        let cross_asset = gather([&equity_month, &gold, &bonds])
            .map(|[equity, gold, bonds]| CrossAssetHistory { equity, gold, bonds });
        let regional = gather([&equity_month, &europe, &asia])
            .map(|[us, europe, asia]| RegionalHistory { us, europe, asia });
        let safe_haven = gather([&equity_quarter, &long_bond])
            .map(|[equity, long_bond]| SafeHavenHistory { equity, long_bond });

        let observation = MarketObservation {
            vix: self.reading("vix", vix, self.fallbacks.vix),
            equity,
            bond_10y: self.reading("bond_10y", bond_10y, self.fallbacks.bond_10y),
            put_call: self.reading("put_call", put_call, self.fallbacks.put_call),
            junk_spread: self.reading("junk_spread", junk_spread, self.fallbacks.junk_spread),
            volume_window: equity_month,
            cross_asset,
            regional,
            safe_haven,
        };

        info!(
            equity_bars = observation.equity.fetched().map_or(0, PriceHistory::len),
            vix = observation.vix.value,
            "Market observation collected"
        );

        observation
    }

    /// 중복을 제거한 시계열 요청을 동시에 실행.
    async fn fetch_series(
        &self,
        requests: &[(&str, HistoryRange)],
    ) -> HashMap<SeriesKey, FetchOutcome<PriceHistory>> {
        let mut unique = requests.to_vec();
        unique.sort_unstable();
        unique.dedup();

        let futures = unique.into_iter().map(|(symbol, range)| async move {
            let result = self.market.daily_history(symbol, range).await;
            match &result {
                Ok(history) => debug!(
                    symbol,
                    range = range.as_yahoo(),
                    bars = history.len(),
                    "Series fetched"
                ),
                Err(e) => warn!(
                    symbol,
                    range = range.as_yahoo(),
                    error = %e,
                    "Series unavailable"
                ),
            }
            ((symbol.to_string(), range), FetchOutcome::from_result(result))
        });

        join_all(futures).await.into_iter().collect()
    }

    fn reading<E: fmt::Display>(
        &self,
        input: &str,
        result: std::result::Result<f64, E>,
        fallback: f64,
    ) -> Reading {
        match result {
            Ok(value) if value.is_finite() => Reading::live(value),
            Ok(value) => {
                warn!(input, value, fallback, "Non-finite reading, using fallback");
                Reading::fallback(fallback)
            }
            Err(e) => {
                warn!(input, error = %e, fallback, "Reading unavailable, using fallback");
                Reading::fallback(fallback)
            }
        }
    }
}

/// 모든 시계열이 조회되었을 때만 `Fetched`. 실패 사유는 모두 이어 붙입니다.
fn gather<const N: usize>(
    parts: [&FetchOutcome<PriceHistory>; N],
) -> FetchOutcome<[PriceHistory; N]> {
    let fetched: Option<Vec<PriceHistory>> =
        parts.iter().map(|part| part.fetched().cloned()).collect();

    match fetched.and_then(|histories| <[PriceHistory; N]>::try_from(histories).ok()) {
        Some(histories) => FetchOutcome::Fetched(histories),
        None => {
            let reasons: Vec<&str> = parts.iter().filter_map(|part| part.reason()).collect();
            FetchOutcome::unavailable(reasons.join("; "))
        }
    }
}
