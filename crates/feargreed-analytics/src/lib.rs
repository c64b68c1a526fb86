//! 공포·탐욕 지수 계산 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 시계열 유틸리티 (이동평균, 변화율, 변동성, EMA, RSI, MACD, 상관계수)
//! - 13개 하위 지표 채점기
//! - 고정 가중치 합산기
//! - 스냅샷 조립기
//! - 위 단계를 묶은 [`SentimentEngine`]
//!
//! 모든 계산은 순수 함수이며 I/O는 `feargreed-data`가 담당합니다.
//!
//! # 사용 예시
//!
//! ```
//! use feargreed_analytics::aggregator::aggregate;
//! use feargreed_core::ScoreCard;
//!
//! // 모든 하위 점수가 50이면 최종 점수도 50
//! assert_eq!(aggregate(&ScoreCard::uniform(50)), 50);
//! ```

pub mod aggregator;
pub mod engine;
pub mod indicators;
pub mod scorers;
pub mod snapshot;

pub use aggregator::{aggregate, combine, recompute_final_score, weighted_contributions};
pub use engine::{Evaluation, SentimentEngine};
pub use indicators::{IndicatorError, IndicatorResult};
pub use snapshot::{assemble_snapshot, DerivedMetrics};
