//! # Marshaling
//!
//! 이벤트와 스크립트 실행 컨텍스트 사이의 양방향 변환.
//!
//! ```text
//! push(event) ──▶ ScriptContext ──▶ runtime.invoke(handler)
//!                                          │
//! update(event) ◀── ScriptReturn ◀─────────┘
//! ```

mod context;
mod native;
mod runtime;

pub use context::{ScriptArg, ScriptContext, ScriptReturn};
pub use native::{NativeHandler, NativeRuntime};
pub use runtime::{call, CallOutcome, ScriptError, ScriptRuntime};
