//! 점수 계산 상수 테이블.
//!
//! 모든 하위 지표의 클램프 범위, 방향, 최소 데이터 길이, 가중치를 한 곳에 둡니다.
//! 채점기와 속성 기반 테스트가 같은 테이블을 참조합니다.
//!
//! # 정규화 (clamp-normalize-scale)
//!
//! 1. 원시값을 `[min, max]`로 클램프
//! 2. 선형으로 `[0, 1]`에 매핑 (방향에 따라 뒤집음)
//! 3. 100을 곱한 뒤 소수점 이하 버림
//! 4. 안전장치로 `[0, 100]`에 다시 클램프

use rust_decimal::Decimal;

use super::indicator::Indicator;

/// 데이터 부족·조회 실패 시 사용하는 중립 점수.
pub const NEUTRAL_SCORE: u8 = 50;

/// 가중치 합계 (basis point, 10 000 = 1.0).
pub const TOTAL_WEIGHT_BP: u32 = 10_000;

/// 원시값과 점수의 방향 관계.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// 원시값이 클수록 점수가 높음
    Direct,
    /// 원시값이 작을수록 점수가 높음
    Inverse,
}

/// 정규화 도메인 범위.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampRange {
    pub min: f64,
    pub max: f64,
    pub direction: Direction,
}

impl ClampRange {
    pub const fn direct(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            direction: Direction::Direct,
        }
    }

    pub const fn inverse(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            direction: Direction::Inverse,
        }
    }

    /// 원시값을 `[0, 100]` 정수 점수로 변환합니다.
    ///
    /// 값이 NaN이거나 범위가 비어 있으면(`max <= min`) `None`을 반환합니다.
    /// 무한대는 범위 끝으로 클램프됩니다.
    pub fn scale(&self, value: f64) -> Option<u8> {
        if value.is_nan() || !(self.max > self.min) {
            return None;
        }

        let clamped = value.clamp(self.min, self.max);
        let span = self.max - self.min;
        let normalized = match self.direction {
            Direction::Direct => (clamped - self.min) / span,
            Direction::Inverse => (self.max - clamped) / span,
        };

        let score = (normalized * 100.0).trunc().clamp(0.0, 100.0);
        Some(score as u8)
    }
}

/// 하위 지표 하나의 계산 상수.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorSpec {
    pub indicator: Indicator,
    /// 가중치 (basis point)
    pub weight_bp: u32,
    /// 고정 정규화 범위. 고가/저가처럼 입력에 따라 범위가 정해지는 지표나
    /// 다른 점수를 결합하는 지표는 `None`.
    pub range: Option<ClampRange>,
    /// 필요한 최소 데이터 길이 (0이면 제한 없음)
    pub min_history: usize,
}

impl IndicatorSpec {
    /// 가중치 (1.0 = 100%).
    pub fn weight(&self) -> Decimal {
        Decimal::new(i64::from(self.weight_bp), 4)
    }
}

/// 13개 하위 지표의 계산 상수. 순서는 [`Indicator::ALL`]과 같습니다.
pub const SCORING_TABLE: [IndicatorSpec; Indicator::COUNT] = [
    IndicatorSpec {
        indicator: Indicator::Vix,
        weight_bp: 2000,
        range: Some(ClampRange::inverse(10.0, 45.0)),
        min_history: 0,
    },
    IndicatorSpec {
        indicator: Indicator::Momentum,
        weight_bp: 1500,
        range: Some(ClampRange::direct(-0.1, 0.1)),
        min_history: 125,
    },
    IndicatorSpec {
        indicator: Indicator::SafeHaven,
        weight_bp: 1200,
        range: Some(ClampRange::direct(-0.2, 0.2)),
        min_history: 0,
    },
    IndicatorSpec {
        indicator: Indicator::PutCall,
        weight_bp: 1000,
        range: Some(ClampRange::inverse(0.7, 1.2)),
        min_history: 0,
    },
    IndicatorSpec {
        indicator: Indicator::Junk,
        weight_bp: 800,
        range: Some(ClampRange::inverse(2.0, 8.0)),
        min_history: 0,
    },
    IndicatorSpec {
        indicator: Indicator::Breadth,
        weight_bp: 800,
        range: None,
        min_history: 0,
    },
    IndicatorSpec {
        indicator: Indicator::Volume,
        weight_bp: 500,
        range: Some(ClampRange::inverse(0.5, 2.0)),
        min_history: 0,
    },
    IndicatorSpec {
        indicator: Indicator::Volatility,
        weight_bp: 800,
        range: Some(ClampRange::inverse(0.10, 0.40)),
        min_history: 20,
    },
    IndicatorSpec {
        indicator: Indicator::Correlation,
        weight_bp: 500,
        // 평균 상관계수. 점수 = (1 - 상관) × 100 이므로 0 이하는 100점
        range: Some(ClampRange::inverse(0.0, 1.0)),
        min_history: 10,
    },
    IndicatorSpec {
        indicator: Indicator::Sentiment,
        weight_bp: 400,
        range: None,
        min_history: 0,
    },
    IndicatorSpec {
        indicator: Indicator::Technical,
        weight_bp: 300,
        // RSI 구간
        range: Some(ClampRange::direct(30.0, 70.0)),
        min_history: 26,
    },
    IndicatorSpec {
        indicator: Indicator::Economic,
        weight_bp: 100,
        range: Some(ClampRange::direct(1.0, 5.0)),
        min_history: 0,
    },
    IndicatorSpec {
        indicator: Indicator::Global,
        weight_bp: 100,
        range: Some(ClampRange::direct(-0.1, 0.1)),
        min_history: 0,
    },
];

/// 지표의 고정 정규화 범위로 점수를 계산합니다.
///
/// 고정 범위가 없는 지표이거나 값이 NaN이면 `None`.
pub fn scale_for(indicator: Indicator, value: f64) -> Option<u8> {
    indicator.spec().range.and_then(|range| range.scale(value))
}
