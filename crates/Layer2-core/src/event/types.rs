//! Event Types - 스크립트 이벤트 공통 타입
//!
//! 모든 카테고리 이벤트가 공유하는 ID, 카테고리, 헤더와
//! 디스패치 엔진이 사용하는 `ScriptEvent` trait을 정의합니다.

use crate::filter::EventCriteria;
use crate::marshal::{ScriptContext, ScriptReturn};
use otscript_foundation::Error;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};

// ============================================================================
// Event ID
// ============================================================================

/// 이벤트 ID (진단/순서 확인용, 의미상 동등성에는 사용하지 않음)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(u32);

impl EventId {
    /// 프로세스 전역 카운터에서 다음 ID 발급
    pub fn next() -> Self {
        EVENT_IDS.next()
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "event-{}", self.0)
    }
}

/// 단조 증가 ID 카운터
///
/// u32 범위를 넘으면 0으로 돌아갑니다 (wrap-around).
pub struct EventIdCounter(AtomicU32);

impl EventIdCounter {
    pub const fn new(start: u32) -> Self {
        Self(AtomicU32::new(start))
    }

    pub fn next(&self) -> EventId {
        // fetch_add는 overflow 시 wrap
        EventId(self.0.fetch_add(1, Ordering::Relaxed))
    }

    pub fn reset(&self, start: u32) {
        self.0.store(start, Ordering::SeqCst);
    }
}

static EVENT_IDS: EventIdCounter = EventIdCounter::new(1);

/// 전역 이벤트 ID 카운터 초기화
///
/// 서버 시작 시 한 번 호출합니다. 이미 발급된 ID와 겹칠 수 있으므로
/// 디스패치 도중에는 호출하지 마세요.
pub fn init_event_ids(start: u32) {
    EVENT_IDS.reset(start);
}

// ============================================================================
// Event Category
// ============================================================================

/// 이벤트 카테고리 (리스너 목록과 criteria 형태를 결정)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventCategory {
    /// 크리처가 말할 때
    OnSay,
    /// 플레이어가 아이템을 사용할 때
    OnUseItem,
    /// 플레이어가 아이템을 장착/해제할 때
    OnEquipItem,
    /// 크리처가 타일에 들어가거나 나올 때
    OnMoveCreature,
    /// 아이템이 타일에 추가/제거될 때
    OnMoveItem,
    /// 채팅 채널 입장
    OnJoinChannel,
    /// 채팅 채널 퇴장
    OnLeaveChannel,
    /// 서버 접속
    OnLogin,
    /// 서버 종료
    OnLogout,
    /// 오브젝트를 살펴볼 때
    OnLook,
}

impl EventCategory {
    pub const ALL: [EventCategory; 10] = [
        Self::OnSay,
        Self::OnUseItem,
        Self::OnEquipItem,
        Self::OnMoveCreature,
        Self::OnMoveItem,
        Self::OnJoinChannel,
        Self::OnLeaveChannel,
        Self::OnLogin,
        Self::OnLogout,
        Self::OnLook,
    ];

    /// 스크립트에서 사용하는 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnSay => "OnSay",
            Self::OnUseItem => "OnUseItem",
            Self::OnEquipItem => "OnEquipItem",
            Self::OnMoveCreature => "OnMoveCreature",
            Self::OnMoveItem => "OnMoveItem",
            Self::OnJoinChannel => "OnJoinChannel",
            Self::OnLeaveChannel => "OnLeaveChannel",
            Self::OnLogin => "OnLogin",
            Self::OnLogout => "OnLogout",
            Self::OnLook => "OnLook",
        }
    }

    /// 이 카테고리가 요구하는 criteria 종류 (None이면 criteria 없음)
    pub fn criteria_kind(&self) -> Option<&'static str> {
        match self {
            Self::OnSay => Some("Say"),
            Self::OnUseItem => Some("UseItem"),
            Self::OnEquipItem => Some("EquipItem"),
            Self::OnMoveCreature => Some("MoveCreature"),
            Self::OnMoveItem => Some("MoveItem"),
            Self::OnLook => Some("Look"),
            Self::OnJoinChannel | Self::OnLeaveChannel | Self::OnLogin | Self::OnLogout => None,
        }
    }

    pub fn has_criteria(&self) -> bool {
        self.criteria_kind().is_some()
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// Event Header
// ============================================================================

/// 모든 이벤트가 가지는 공통 헤더
#[derive(Debug, Clone)]
pub struct EventHeader {
    /// 생성 시 발급된 ID
    pub id: EventId,

    /// 카테고리 (불변)
    pub category: EventCategory,

    /// 처리한 리스너가 없을 때 기본 동작을 진행할지 여부
    pub propagate_by_default: bool,
}

impl EventHeader {
    pub fn new(category: EventCategory, propagate_by_default: bool) -> Self {
        Self {
            id: EventId::next(),
            category,
            propagate_by_default,
        }
    }
}

// ============================================================================
// ScriptEvent Trait
// ============================================================================

/// 디스패치 가능한 이벤트
///
/// 카테고리마다 하나의 구현이 있으며, criteria 매칭과
/// 스크립트 컨텍스트 마샬링(push/update)을 담당합니다.
pub trait ScriptEvent {
    /// 이 카테고리의 filter criteria 타입 (없으면 `NoCriteria`)
    type Criteria: EventCriteria;

    /// 카테고리 태그
    const CATEGORY: EventCategory;

    /// 공통 헤더
    fn header(&self) -> &EventHeader;

    /// 페이로드를 카테고리별 고정 순서로 컨텍스트에 push (이벤트는 변경하지 않음)
    fn push(&self, context: &mut ScriptContext);

    /// 핸들러가 돌려준 값을 출력 필드에 반영
    ///
    /// 핸들러가 건드리지 않은 필드는 이전 값을 유지합니다.
    fn update(&mut self, _result: &ScriptReturn) {}

    /// criteria가 이 이벤트와 매칭되는지 확인 (순수 함수)
    fn check_match(&self, criteria: &Self::Criteria) -> bool;

    fn id(&self) -> EventId {
        self.header().id
    }

    /// 디스패치 결과에 따라 게임 기본 동작을 진행할지 결정
    fn should_propagate(&self, handled: bool) -> bool {
        !handled && self.header().propagate_by_default
    }
}

// ============================================================================
// 테스트
// ============================================================================
