//! Error types for otscript
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// otscript 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    // ========================================================================
    // 리스너 등록 관련
    // ========================================================================
    #[error("Criteria mismatch: {category} listeners cannot take {criteria} criteria")]
    CriteriaMismatch { category: String, criteria: String },

    #[error("Unknown event category: {0}")]
    UnknownCategory(String),

    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    // ========================================================================
    // 로깅 관련
    // ========================================================================
    #[error("Logging error: {0}")]
    Logging(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// 등록 시점의 계약 위반인지 확인 (스크립트 작성자 실수)
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            Error::CriteriaMismatch { .. } | Error::UnknownCategory(_) | Error::InvalidCriteria(_)
        )
    }

    /// Criteria 불일치 에러 생성 헬퍼
    pub fn criteria_mismatch(category: impl Into<String>, criteria: impl Into<String>) -> Self {
        Error::CriteriaMismatch {
            category: category.into(),
            criteria: criteria.into(),
        }
    }
}
