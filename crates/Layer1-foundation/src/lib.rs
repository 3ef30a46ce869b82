//! # otscript-foundation
//!
//! Foundation layer for otscript:
//! - Error: 중앙 에러 타입 (thiserror)
//! - Config: 디스패치/로깅 설정 (TOML, JSON)
//! - Logging: tracing subscriber 초기화

pub mod config;
pub mod error;
pub mod logging;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{DispatchConfig, LoggingConfig, ScriptConfig};
