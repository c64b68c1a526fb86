//! 공포·탐욕 지수 CLI 도구.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 1회 실행 파이프라인 (수집 → 계산 → 저장)
//! - 저장된 스냅샷 조회 및 심리 구간 표시

pub mod commands;

pub use commands::*;
