//! otscript-core: Script Event Dispatch
//!
//! Layer2 - 게임 이벤트를 스크립트 리스너로 라우팅하는 레이어
//!
//! # 주요 모듈
//!
//! - `event`: 이벤트 카테고리와 페이로드 (`ScriptEvent`)
//! - `filter`: 카테고리별 매칭 조건 (`FilterCriteria`)
//! - `listener`: 리스너와 레지스트리
//! - `marshal`: 이벤트 ↔ 스크립트 컨텍스트 변환, 런타임 경계
//! - `dispatch`: 매칭/호출/단락 로직 (`Dispatcher`)
//!
//! # 사용 예시
//!
//! ```ignore
//! use otscript_core::{Dispatcher, ListenerRegistry, NativeRuntime, OnSay, ScriptReturn, StringFilter};
//!
//! let registry = Arc::new(ListenerRegistry::new());
//! let dispatcher = Dispatcher::new(registry.clone());
//! let mut runtime = NativeRuntime::new();
//!
//! let greet = runtime.add("greet", |ctx| {
//!     Ok(ScriptReturn::handled().with_value("text", "hello!"))
//! });
//! registry.register::<OnSay>(StringFilter::exact("hi"), greet);
//!
//! let mut event = OnSay::new(speaker, SpeakClass::Say, None, "Hi");
//! if dispatcher.dispatch(&mut event, &mut runtime) {
//!     // 스크립트가 이벤트를 소비함
//! }
//! ```

pub mod dispatch;
pub mod event;
pub mod filter;
pub mod listener;
pub mod marshal;

// Re-exports: Dispatch
pub use dispatch::{DispatchFrame, DispatchStack, DispatchStats, DispatchStatsSnapshot, Dispatcher};

// Re-exports: Event
pub use event::{
    init_event_ids, ChatChannel, Creature, EventCategory, EventHeader, EventId, EventIdCounter,
    Item, OnEquipItem, OnJoinChannel, OnLeaveChannel, OnLogin, OnLogout, OnLook, OnMoveCreature,
    OnMoveItem, OnSay, OnUseItem, Player, Position, ReturnValue, ScriptEvent, Slot, SpeakClass,
    Thing, Tile,
};

// Re-exports: Filter
pub use filter::{
    EquipItemFilter, EventCriteria, FilterCriteria, IdentityKind, ItemIdentity, LookFilter,
    LookKind, MatchMode, MoveCreatureFilter, MoveItemFilter, NoCriteria, StringFilter,
};

// Re-exports: Listener
pub use listener::{HandlerRef, Listener, ListenerHandle, ListenerId, ListenerRegistry};

// Re-exports: Marshal
pub use marshal::{
    CallOutcome, NativeHandler, NativeRuntime, ScriptArg, ScriptContext, ScriptError,
    ScriptReturn, ScriptRuntime,
};

// Re-exports: Foundation
pub use otscript_foundation::{DispatchConfig, Error, LoggingConfig, Result, ScriptConfig};
