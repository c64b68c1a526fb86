//! 원시 시장 관측값.
//!
//! 데이터 수집 계층이 한 번의 실행마다 한 번 채우며, 채점 이후 버려집니다.
//! 조회 실패는 [`FetchOutcome::Unavailable`]이나 [`ReadingOrigin::Fallback`]으로
//! 명시적으로 전달됩니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 일봉 하나.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// 시간순으로 정렬된 일봉 시계열.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceHistory {
    pub symbol: String,
    pub bars: Vec<DailyBar>,
}

impl PriceHistory {
    /// 일봉 목록으로 생성합니다. 날짜순으로 정렬합니다.
    pub fn new(symbol: impl Into<String>, mut bars: Vec<DailyBar>) -> Self {
        bars.sort_by_key(|b| b.date);
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    /// 종가만으로 시계열을 만듭니다 (시가/고가/저가 = 종가, 거래량 0).
    pub fn from_closes(symbol: impl Into<String>, start: NaiveDate, closes: &[f64]) -> Self {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| DailyBar {
                date: start + chrono::Duration::days(i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 0.0,
            })
            .collect();
        Self::new(symbol, bars)
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// 종가 시계열.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// 거래량 시계열.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// (날짜, 종가) 시계열.
    pub fn dated_closes(&self) -> Vec<(NaiveDate, f64)> {
        self.bars.iter().map(|b| (b.date, b.close)).collect()
    }

    pub fn first_close(&self) -> Option<f64> {
        self.bars.first().map(|b| b.close)
    }

    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    /// 기간 최고가 (NaN 제외).
    pub fn period_high(&self) -> Option<f64> {
        self.bars
            .iter()
            .map(|b| b.high)
            .filter(|v| !v.is_nan())
            .reduce(f64::max)
    }

    /// 기간 최저가 (NaN 제외).
    pub fn period_low(&self) -> Option<f64> {
        self.bars
            .iter()
            .map(|b| b.low)
            .filter(|v| !v.is_nan())
            .reduce(f64::min)
    }
}

/// 시계열 조회 결과.
///
/// 조회 실패 원인을 삼키지 않고 채점 계층까지 전달합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// 조회 성공
    Fetched(T),
    /// 조회 실패 (대체 점수 사용)
    Unavailable { reason: String },
}

impl<T> FetchOutcome<T> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// `Result`를 변환합니다. 에러는 메시지로 보존됩니다.
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Fetched(value),
            Err(e) => Self::unavailable(e.to_string()),
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn fetched(&self) -> Option<&T> {
        match self {
            Self::Fetched(value) => Some(value),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Fetched(_) => None,
            Self::Unavailable { reason } => Some(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            Self::Fetched(value) => FetchOutcome::Fetched(f(value)),
            Self::Unavailable { reason } => FetchOutcome::Unavailable { reason },
        }
    }
}

/// 스칼라 관측값의 출처.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingOrigin {
    /// 실제 조회값
    Live,
    /// 조회 실패로 대체값 사용
    Fallback,
}

/// 스칼라 관측값 (VIX, 금리, 비율, 스프레드).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub value: f64,
    pub origin: ReadingOrigin,
}

impl Reading {
    pub fn live(value: f64) -> Self {
        Self {
            value,
            origin: ReadingOrigin::Live,
        }
    }

    pub fn fallback(value: f64) -> Self {
        Self {
            value,
            origin: ReadingOrigin::Fallback,
        }
    }

    /// 조회값이 있으면 Live, 없으면 대체값.
    pub fn or_fallback(value: Option<f64>, fallback: f64) -> Self {
        value.map_or_else(|| Self::fallback(fallback), Self::live)
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == ReadingOrigin::Fallback
    }
}

/// 상관관계 계산용 1개월 시계열 (주식·금·채권).
#[derive(Debug, Clone, PartialEq)]
pub struct CrossAssetHistory {
    pub equity: PriceHistory,
    pub gold: PriceHistory,
    pub bonds: PriceHistory,
}

/// 지역별 대표 지수 1개월 시계열.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalHistory {
    pub us: PriceHistory,
    pub europe: PriceHistory,
    pub asia: PriceHistory,
}

/// 주식 대 장기채 3개월 시계열.
#[derive(Debug, Clone, PartialEq)]
pub struct SafeHavenHistory {
    pub equity: PriceHistory,
    pub long_bond: PriceHistory,
}

/// 한 번의 실행에 필요한 모든 원시 관측값.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketObservation {
    /// VIX 수준
    pub vix: Reading,
    /// 주 지수 6개월 일봉 (필수)
    pub equity: FetchOutcome<PriceHistory>,
    /// 10년 국채 금리 (%)
    pub bond_10y: Reading,
    /// Put/Call 비율
    pub put_call: Reading,
    /// 하이일드 스프레드 (%p)
    pub junk_spread: Reading,
    /// 주 지수 1개월 일봉 (거래량 점수)
    pub volume_window: FetchOutcome<PriceHistory>,
    pub cross_asset: FetchOutcome<CrossAssetHistory>,
    pub regional: FetchOutcome<RegionalHistory>,
    pub safe_haven: FetchOutcome<SafeHavenHistory>,
}
