//! 시장 데이터 수집 및 스냅샷 저장.
//!
//! 이 crate는 다음을 제공합니다:
//! - Yahoo Finance 일봉 조회 ([`YahooMarketData`])
//! - CBOE Put/Call 비율, FRED 하이일드 스프레드 CSV 조회 ([`SentimentSources`])
//! - 조회 결과를 [`MarketObservation`](feargreed_core::MarketObservation)으로 모으는 수집기
//! - JSON 스냅샷 저장소

pub mod collector;
pub mod error;
pub mod provider;
pub mod sources;
pub mod store;

pub use collector::ObservationCollector;
pub use error::{DataError, Result};
pub use provider::{HistoryRange, MarketDataProvider, YahooMarketData};
pub use sources::{parse_junk_spread_csv, parse_put_call_csv, SentimentFeed, SentimentSources};
pub use store::JsonSnapshotStore;
