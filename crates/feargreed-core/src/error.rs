//! 공포·탐욕 지수 시스템의 에러 타입.

use thiserror::Error;

/// 핵심 에러.
///
/// 하위 지표 계산은 실패 시 중립값(50)으로 대체되므로 여기에 나타나지 않습니다.
/// 실행 자체를 중단해야 하는 경우만 표현합니다.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 필수 입력 누락 (주 지수 가격 시계열)
    #[error("필수 입력 누락: {0}")]
    FatalInputMissing(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 파일 입출력 에러
    #[error("입출력 에러: {0}")]
    Io(String),
}

/// 공포·탐욕 지수 작업을 위한 Result 타입.
pub type SentimentResult<T> = Result<T, SentimentError>;

impl SentimentError {
    /// 스냅샷을 만들지 않고 실행을 멈춰야 하는 에러인지 확인합니다.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SentimentError::FatalInputMissing(_) | SentimentError::Config(_)
        )
    }
}

impl From<serde_json::Error> for SentimentError {
    fn from(err: serde_json::Error) -> Self {
        SentimentError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for SentimentError {
    fn from(err: std::io::Error) -> Self {
        SentimentError::Io(err.to_string())
    }
}

impl From<config::ConfigError> for SentimentError {
    fn from(err: config::ConfigError) -> Self {
        SentimentError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_fatal() {
        let missing = SentimentError::FatalInputMissing("^GSPC".to_string());
        assert!(missing.is_fatal());

        let io = SentimentError::Io("disk full".to_string());
        assert!(!io.is_fatal());
    }

    #[test]
    fn test_error_from_serde() {
        let err = serde_json::from_str::<u8>("not json").unwrap_err();
        let converted: SentimentError = err.into();
        assert!(matches!(converted, SentimentError::Serialization(_)));
    }
}
