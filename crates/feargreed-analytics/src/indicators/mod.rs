//! 시계열 유틸리티.
//!
//! 채점기가 사용하는 순수 함수들입니다. 모두 시간순으로 정렬된 `f64`
//! 시계열을 입력으로 받습니다.
//!
//! # 지원 지표
//!
//! ## 추세 (Trend)
//! - **이동평균**: 마지막 `window`개의 평균
//! - **EMA**: 지수 이동평균 (첫 관측값으로 시작)
//! - **MACD**: EMA(12) − EMA(26)의 마지막 값
//!
//! ## 모멘텀 (Momentum)
//! - **RSI**: 최근 `period`개 변화량의 평균 상승/하락 비율
//!
//! ## 변동성 (Volatility)
//! - **변화율**: `(p[i] − p[i−1]) / p[i−1]`
//! - **연환산 표준편차**: 일간 변화율의 표본 표준편차 × √252
//!
//! ## 상관관계 (Correlation)
//! - **Pearson 상관계수**, 날짜 정렬 수익률, 기간 수익률
//!
//! # 사용 예시
//!
//! ```
//! use feargreed_analytics::indicators::{moving_average, rsi, RsiParams};
//!
//! let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
//! let ma = moving_average(&prices, 5).unwrap();
//! assert_eq!(ma, 127.0);
//!
//! // 하락이 없으면 RSI는 100
//! assert_eq!(rsi(&prices, RsiParams::default()).unwrap(), 100.0);
//! ```

pub mod correlation;
pub mod momentum;
pub mod trend;
pub mod volatility;

use thiserror::Error;

pub use correlation::{
    align_returns, cross_asset_correlation, dated_returns, pearson_correlation, period_return,
};
pub use momentum::{rsi, RsiParams};
pub use trend::{ema, macd, moving_average, MacdParams};
pub use volatility::{percent_change, rolling_std, TRADING_DAYS_PER_YEAR};

/// 지표 계산 오류.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IndicatorError {
    /// 데이터 부족 오류
    #[error("데이터가 부족합니다: 필요 {required}개, 제공 {provided}개")]
    InsufficientData { required: usize, provided: usize },

    /// 잘못된 파라미터
    #[error("잘못된 파라미터: {0}")]
    InvalidParameter(String),

    /// 0으로 나누기, 분산 0 등 값이 정의되지 않음
    #[error("계산 불가: {0}")]
    Degenerate(String),
}

/// 지표 계산 결과 타입.
pub type IndicatorResult<T> = Result<T, IndicatorError>;

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
