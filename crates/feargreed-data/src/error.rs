//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// 데이터 조회·저장 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 외부 서비스 연결 실패
    #[error("연결 실패: {0}")]
    ConnectionError(String),

    /// 외부 소스 요청 실패
    #[error("데이터 요청 실패 ({symbol}): {message}")]
    FetchError { symbol: String, message: String },

    /// 응답 파싱 실패
    #[error("데이터 파싱 실패: {0}")]
    ParseError(String),

    /// 빈 응답
    #[error("데이터 없음: {0}")]
    NoData(String),

    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    /// 직렬화/역직렬화 오류
    #[error("직렬화 오류: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        let symbol = err
            .url()
            .map(|url| url.host_str().unwrap_or_default().to_string())
            .unwrap_or_default();
        DataError::FetchError {
            symbol,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
