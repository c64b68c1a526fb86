//! 공포·탐욕 지수 계산을 위한 도메인 모델.

mod indicator;
mod mood;
mod observation;
mod score;
pub mod scoring;
mod snapshot;

pub use indicator::*;
pub use mood::*;
pub use observation::*;
pub use score::*;
pub use scoring::{
    ClampRange, Direction, IndicatorSpec, NEUTRAL_SCORE, SCORING_TABLE, TOTAL_WEIGHT_BP,
};
pub use snapshot::*;
