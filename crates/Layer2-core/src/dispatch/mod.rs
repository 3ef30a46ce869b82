//! # Dispatch
//!
//! 이벤트 하나를 등록된 리스너들에게 순서대로 전달합니다.
//!
//! - `engine`: 매칭/호출/단락(short-circuit) 로직 (`Dispatcher`)
//! - `stack`: 중첩 디스패치 추적
//! - `stats`: 누적 카운터

mod engine;
mod stack;
mod stats;

pub use engine::Dispatcher;
pub use stack::{DispatchFrame, DispatchStack};
pub use stats::{DispatchStats, DispatchStatsSnapshot};
