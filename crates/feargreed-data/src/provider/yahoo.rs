//! Yahoo Finance 일봉 Provider.
//!
//! # 사용 예시
//!
//! ```rust,ignore
//! use feargreed_data::{HistoryRange, MarketDataProvider, YahooMarketData};
//!
//! let provider = YahooMarketData::new()?;
//! let history = provider.daily_history("^GSPC", HistoryRange::SixMonths).await?;
//! println!("S&P 500 일봉 {}개", history.len());
//! ```

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use feargreed_core::{DailyBar, PriceHistory};
use tracing::{debug, info};
use yahoo_finance_api as yahoo;

use super::{HistoryRange, MarketDataProvider};
use crate::error::{DataError, Result};

/// Yahoo Finance 기반 일봉 제공자.
pub struct YahooMarketData {
    connector: yahoo::YahooConnector,
}

impl YahooMarketData {
    /// 새로운 YahooMarketData 생성.
    pub fn new() -> Result<Self> {
        let connector = yahoo::YahooConnector::new()
            .map_err(|e| DataError::ConnectionError(format!("Yahoo Finance: {}", e)))?;

        Ok(Self { connector })
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketData {
    async fn daily_history(&self, symbol: &str, range: HistoryRange) -> Result<PriceHistory> {
        info!(symbol, range = range.as_yahoo(), "Fetching daily history");

        let response = self
            .connector
            .get_quote_range(symbol, "1d", range.as_yahoo())
            .await
            .map_err(|e| DataError::FetchError {
                symbol: symbol.to_string(),
                message: format!("{}", e),
            })?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::ParseError(format!("{}: {}", symbol, e)))?;

        let bars: Vec<DailyBar> = quotes
            .iter()
            .filter_map(|q| {
                daily_bar(
                    q.timestamp as i64,
                    q.open,
                    q.high,
                    q.low,
                    q.close,
                    q.volume as f64,
                )
            })
            .collect();

        if bars.is_empty() {
            return Err(DataError::NoData(format!("심볼 {} 데이터 없음", symbol)));
        }

        debug!("{} 일봉 {} 개 수신", symbol, bars.len());
        Ok(PriceHistory::new(symbol, bars))
    }
}

/// Yahoo 시세 한 건을 일봉으로 변환.
///
/// 타임스탬프가 잘못되었거나 종가가 유한하지 않으면 버립니다.
fn daily_bar(
    timestamp: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
) -> Option<DailyBar> {
    if !close.is_finite() {
        return None;
    }

    let date = Utc.timestamp_opt(timestamp, 0).single()?.date_naive();

    Some(DailyBar {
        date,
        open,
        high,
        low,
        close,
        volume,
    })
}
