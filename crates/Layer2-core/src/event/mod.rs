//! # Script Events
//!
//! 게임에서 발생한 일을 스크립트 리스너로 전달하는 이벤트 타입들.
//!
//! ## 카테고리
//!
//! | 카테고리        | Criteria             | 출력 필드      |
//! |-----------------|----------------------|----------------|
//! | OnSay           | `StringFilter`       | text, class    |
//! | OnUseItem       | `ItemIdentity`       | retval         |
//! | OnEquipItem     | `EquipItemFilter`    | -              |
//! | OnMoveCreature  | `MoveCreatureFilter` | -              |
//! | OnMoveItem      | `MoveItemFilter`     | -              |
//! | OnLook          | `LookFilter`         | description    |
//! | OnJoinChannel   | 없음                 | -              |
//! | OnLeaveChannel  | 없음                 | -              |
//! | OnLogin         | 없음                 | -              |
//! | OnLogout        | 없음                 | -              |
//!
//! ## 새 이벤트 추가
//!
//! 1. `EventCategory`에 카테고리 추가
//! 2. criteria가 있으면 `filter` 모듈에 타입 추가 후 `FilterCriteria`에 연결
//! 3. `ScriptEvent` 구현 (push 순서 고정)
//! 4. 게임 로직에서 이벤트 생성 후 `Dispatcher::dispatch` 호출

mod creature;
mod game;
mod item;
mod say;
mod session;
mod types;

pub use creature::{OnLook, OnMoveCreature};
pub use game::{ChatChannel, Creature, Item, Player, Position, ReturnValue, Slot, SpeakClass, Thing, Tile};
pub use item::{OnEquipItem, OnMoveItem, OnUseItem};
pub use say::OnSay;
pub use session::{OnJoinChannel, OnLeaveChannel, OnLogin, OnLogout};
pub use types::{init_event_ids, EventCategory, EventHeader, EventId, EventIdCounter, ScriptEvent};
