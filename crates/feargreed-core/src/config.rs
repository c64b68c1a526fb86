//! 설정 관리.
//!
//! 실행 환경에 따라 달라지는 값(출력 경로, 데이터 소스, 대체값)만 다룹니다.
//! 점수 계산 상수(클램프 범위, 가중치)는 [`crate::domain::scoring`]의
//! 컴파일 타임 테이블이며 설정으로 바꿀 수 없습니다.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::SentimentResult;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 스냅샷 출력 설정
    #[serde(default)]
    pub output: OutputConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 시세 심볼 설정
    #[serde(default)]
    pub symbols: SymbolConfig,
    /// 외부 CSV 데이터 소스 설정
    #[serde(default)]
    pub sources: SourceConfig,
    /// 데이터 조회 실패 시 대체값
    #[serde(default)]
    pub fallbacks: FallbackValues,
}

/// 스냅샷 출력 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// JSON 스냅샷 파일 경로
    pub path: PathBuf,
    /// 들여쓰기된 JSON 출력 여부
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("docs/daily.json"),
            pretty: true,
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Yahoo Finance 심볼 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SymbolConfig {
    /// 주 지수 (S&P 500)
    pub equity: String,
    /// 변동성 지수
    pub vix: String,
    /// 10년 국채 금리
    pub ten_year: String,
    /// 금 선물
    pub gold: String,
    /// 장기 국채 ETF
    pub long_bond: String,
    /// 유럽 대표 지수
    pub europe: String,
    /// 아시아 대표 지수
    pub asia: String,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            equity: "^GSPC".to_string(),
            vix: "^VIX".to_string(),
            ten_year: "^TNX".to_string(),
            gold: "GC=F".to_string(),
            long_bond: "TLT".to_string(),
            europe: "^STOXX50E".to_string(),
            asia: "^N225".to_string(),
        }
    }
}

/// 외부 CSV 데이터 소스 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    /// CBOE Put/Call 비율 CSV
    pub put_call_url: String,
    /// FRED 하이일드 스프레드 CSV
    pub junk_spread_url: String,
    /// HTTP 요청 타임아웃 (초)
    pub http_timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            put_call_url: "https://cdn.cboe.com/api/global/delayed_quotes/put_call_ratios/all.csv"
                .to_string(),
            junk_spread_url: "https://fred.stlouisfed.org/graph/fredgraph.csv?id=BAMLH0A0HYM2"
                .to_string(),
            http_timeout_secs: 15,
        }
    }
}

/// 데이터 조회 실패 시 사용하는 중립 대체값.
///
/// 대체값은 점수 계산에서 실제 관측값과 동일하게 취급됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FallbackValues {
    /// VIX 기본값
    pub vix: f64,
    /// 10년 국채 금리 기본값 (%)
    pub bond_10y: f64,
    /// Put/Call 비율 기본값
    pub put_call: f64,
    /// 정크본드 스프레드 기본값 (%p)
    pub junk_spread: f64,
}

impl Default for FallbackValues {
    fn default() -> Self {
        Self {
            vix: 20.0,
            bond_10y: 4.0,
            put_call: 0.95,
            junk_spread: 3.5,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 환경 변수는 `FEARGREED__OUTPUT__PATH`처럼 `FEARGREED` 접두사와
    /// `__` 구분자를 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> SentimentResult<Self> {
        Self::build(Some(path.as_ref()))
    }

    /// 파일이 없으면 기본값과 환경 변수만으로 설정을 구성합니다.
    pub fn load_optional<P: AsRef<Path>>(path: Option<P>) -> SentimentResult<Self> {
        match path {
            Some(p) if p.as_ref().exists() => Self::build(Some(p.as_ref())),
            Some(p) => {
                tracing::warn!(path = %p.as_ref().display(), "설정 파일 없음, 기본값 사용");
                Self::build(None)
            }
            None => Self::build(None),
        }
    }

    fn build(path: Option<&Path>) -> SentimentResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(p) = path {
            builder = builder.add_source(config::File::from(p));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("FEARGREED")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
