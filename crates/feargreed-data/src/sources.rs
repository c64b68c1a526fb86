//! 심리 지표 CSV 소스.
//!
//! - **Put/Call 비율**: CBOE 일간 Put/Call CSV의 `TOTAL` 행
//! - **하이일드 스프레드**: FRED `BAMLH0A0HYM2` 시계열의 최근 값

use std::time::Duration;

use async_trait::async_trait;
use feargreed_core::SourceConfig;
use reqwest::Client;
use tracing::debug;

use crate::error::{DataError, Result};

/// 스칼라 심리 지표 제공자 트레잇.
#[async_trait]
pub trait SentimentFeed: Send + Sync {
    /// 전체 옵션 Put/Call 비율.
    async fn put_call_ratio(&self) -> Result<f64>;

    /// 하이일드 회사채 스프레드 (%p).
    async fn junk_spread(&self) -> Result<f64>;
}

/// CBOE / FRED HTTP 소스.
pub struct SentimentSources {
    client: Client,
    put_call_url: String,
    junk_spread_url: String,
}

impl SentimentSources {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .user_agent(concat!("feargreed/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DataError::ConnectionError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            put_call_url: config.put_call_url.clone(),
            junk_spread_url: config.junk_spread_url.clone(),
        })
    }

    async fn fetch_csv(&self, url: &str) -> Result<String> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        debug!(url, bytes = body.len(), "CSV downloaded");
        Ok(body)
    }
}

#[async_trait]
impl SentimentFeed for SentimentSources {
    async fn put_call_ratio(&self) -> Result<f64> {
        let csv = self.fetch_csv(&self.put_call_url).await?;
        parse_put_call_csv(&csv)
    }

    async fn junk_spread(&self) -> Result<f64> {
        let csv = self.fetch_csv(&self.junk_spread_url).await?;
        parse_junk_spread_csv(&csv)
    }
}

/// `TOTAL`이 들어간 첫 행의 마지막 열.
pub fn parse_put_call_csv(csv: &str) -> Result<f64> {
    let line = csv
        .lines()
        .find(|line| line.contains("TOTAL"))
        .ok_or_else(|| DataError::ParseError("Put/Call CSV에 TOTAL 행이 없습니다".to_string()))?;

    let field = line.rsplit(',').next().unwrap_or_default().trim();
    field
        .parse::<f64>()
        .map_err(|e| DataError::ParseError(format!("Put/Call 값 '{}': {}", field, e)))
}

/// 뒤에서부터 처음 만나는 `날짜,값` 행의 값.
///
/// FRED는 휴일을 `.`으로 표시하므로 숫자가 아닌 행은 건너뜁니다.
pub fn parse_junk_spread_csv(csv: &str) -> Result<f64> {
    csv.lines()
        .rev()
        .filter_map(|line| {
            let mut fields = line.split(',');
            match (fields.next(), fields.next(), fields.next()) {
                (Some(_), Some(value), None) => value.trim().parse::<f64>().ok(),
                _ => None,
            }
        })
        .next()
        .ok_or_else(|| DataError::NoData("하이일드 스프레드 CSV에 유효한 값이 없습니다".to_string()))
}
