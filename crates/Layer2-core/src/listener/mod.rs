//! # Listeners
//!
//! 스크립트가 등록한 (카테고리, criteria, 핸들러) 묶음과 그 레지스트리.

mod registry;
mod types;

pub use registry::ListenerRegistry;
pub use types::{HandlerRef, Listener, ListenerHandle, ListenerId};
