//! Script Config - 통합 설정
//!
//! 디스패치 엔진과 로깅 설정을 하나로 관리합니다.
//! TOML 또는 JSON 파일에서 로드할 수 있습니다.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

// ============================================================================
// Script Config (통합)
// ============================================================================

/// otscript 통합 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptConfig {
    /// 디스패치 설정
    #[serde(default)]
    pub dispatch: DispatchConfig,

    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ScriptConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// 파일 확장자에 따라 TOML 또는 JSON으로 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            other => {
                return Err(Error::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        debug!(
            path = %path.display(),
            max_depth = config.dispatch.max_depth,
            level = %config.logging.level,
            "Loaded script config"
        );
        Ok(config)
    }

    /// TOML 문자열에서 파싱
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// JSON 문자열에서 파싱
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 값 검증
    pub fn validate(&self) -> Result<()> {
        if self.dispatch.max_depth == 0 {
            return Err(Error::Config("dispatch.maxDepth must be at least 1".into()));
        }
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging.level must not be empty".into()));
        }
        Ok(())
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.dispatch.max_depth = depth;
        self
    }

    pub fn trace_listeners(mut self, enabled: bool) -> Self {
        self.dispatch.trace_listeners = enabled;
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}

// ============================================================================
// Dispatch Config
// ============================================================================

/// 디스패치 엔진 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchConfig {
    /// 중첩 디스패치 최대 깊이 (핸들러가 새 이벤트를 발생시키는 경우)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// 리스너 단위 trace 로그 출력
    #[serde(default)]
    pub trace_listeners: bool,
}

fn default_max_depth() -> usize {
    32
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            trace_listeners: false,
        }
    }
}

// ============================================================================
// Logging Config
// ============================================================================

/// 로깅 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// 기본 필터 (RUST_LOG가 있으면 그쪽이 우선)
    #[serde(default = "default_level")]
    pub level: String,

    /// target 출력 여부
    #[serde(default)]
    pub with_target: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            with_target: false,
        }
    }
}

// ============================================================================
// 테스트
// ============================================================================
