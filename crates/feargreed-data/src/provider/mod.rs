//! 시장 데이터 Provider.
//!
//! ## Yahoo Finance
//! - `YahooMarketData`: 지수·선물·ETF 일봉 조회 (인증 불필요)
//!
//! 수집기는 [`MarketDataProvider`] 트레잇에만 의존하므로 테스트에서는
//! 메모리 구현으로 교체합니다.

pub mod yahoo;

use async_trait::async_trait;
use feargreed_core::PriceHistory;
use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

pub use yahoo::YahooMarketData;

/// 일봉 조회 기간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HistoryRange {
    FiveDays,
    OneMonth,
    ThreeMonths,
    SixMonths,
}

impl HistoryRange {
    /// Yahoo chart API의 `range` 파라미터.
    pub fn as_yahoo(self) -> &'static str {
        match self {
            Self::FiveDays => "5d",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
        }
    }
}

/// 일봉 데이터 제공자 트레잇.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// 심볼의 기간 일봉 조회. 빈 응답은 `NoData`.
    async fn daily_history(&self, symbol: &str, range: HistoryRange) -> Result<PriceHistory>;

    /// 최근 종가 (VIX, 금리 등 스칼라 지표용).
    async fn latest_close(&self, symbol: &str) -> Result<f64> {
        let history = self.daily_history(symbol, HistoryRange::FiveDays).await?;
        history
            .last_close()
            .ok_or_else(|| DataError::NoData(format!("심볼 {} 종가 없음", symbol)))
    }
}
