//! Config - 스크립트 엔진 설정
//!
//! - `script.rs` - ScriptConfig 통합 설정 (dispatch + logging)

mod script;

pub use script::{DispatchConfig, LoggingConfig, ScriptConfig};
