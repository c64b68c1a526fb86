//! # Fear & Greed Core
//!
//! 공포·탐욕 지수 계산 시스템의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 원시 시장 관측값 (VIX, 주가 시계열, 금리, 비율, 스프레드)
//! - 13개 하위 지표 정의 및 고정 가중치 테이블
//! - 하위 점수 / 점수표 / 스냅샷
//! - 심리 구간 (Extreme Fear ~ Extreme Greed)
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
