//! Listener 타입 정의

use crate::event::EventCategory;
use crate::filter::FilterCriteria;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// ============================================================================
// ListenerId
// ============================================================================

/// 리스너 ID (레지스트리 안에서 고유)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

// ============================================================================
// HandlerRef
// ============================================================================

#[derive(Debug)]
struct HandlerSlot {
    key: i64,
    name: String,
}

/// 스크립트 런타임 안의 핸들러 참조 (공유 소유)
///
/// `key`는 런타임이 핸들러를 찾는 데 쓰는 값 (예: Lua registry ref).
/// 마지막 참조가 사라질 때 해제됩니다.
#[derive(Debug, Clone)]
pub struct HandlerRef(Arc<HandlerSlot>);

impl HandlerRef {
    pub fn new(key: i64, name: impl Into<String>) -> Self {
        Self(Arc::new(HandlerSlot {
            key,
            name: name.into(),
        }))
    }

    pub fn key(&self) -> i64 {
        self.0.key
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// 같은 핸들러 슬롯을 가리키는지 확인
    pub fn same_as(&self, other: &HandlerRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// 현재 참조 수
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl std::fmt::Display for HandlerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.0.name, self.0.key)
    }
}

// ============================================================================
// Listener
// ============================================================================

/// 등록된 리스너
///
/// 비활성화는 영구적이며, 다시 쓰려면 새로 등록해야 합니다.
#[derive(Debug)]
pub struct Listener {
    id: ListenerId,
    category: EventCategory,
    criteria: Option<FilterCriteria>,
    handler: HandlerRef,
    active: AtomicBool,
}

/// 등록 호출자에게 돌려주는 핸들 (비활성화에 사용)
pub type ListenerHandle = Arc<Listener>;

impl Listener {
    pub(crate) fn new(
        id: ListenerId,
        category: EventCategory,
        criteria: Option<FilterCriteria>,
        handler: HandlerRef,
    ) -> Self {
        Self {
            id,
            category,
            criteria,
            handler,
            active: AtomicBool::new(true),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn category(&self) -> EventCategory {
        self.category
    }

    pub fn criteria(&self) -> Option<&FilterCriteria> {
        self.criteria.as_ref()
    }

    pub fn handler(&self) -> &HandlerRef {
        &self.handler
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// 비활성화, 이전에 활성 상태였으면 true
    pub fn deactivate(&self) -> bool {
        self.active.swap(false, Ordering::AcqRel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deactivate_is_permanent() {
        let listener = Listener::new(
            ListenerId::new(1),
            EventCategory::OnLogin,
            None,
            HandlerRef::new(7, "welcome"),
        );

        assert!(listener.is_active());
        assert!(listener.deactivate());
        assert!(!listener.is_active());
        assert!(!listener.deactivate());
        assert!(!listener.is_active());
    }

    #[test]
    fn test_handler_ref_shared() {
        let handler = HandlerRef::new(3, "onLook");
        let copy = handler.clone();

        assert!(handler.same_as(&copy));
        assert_eq!(handler.ref_count(), 2);
        assert!(!handler.same_as(&HandlerRef::new(3, "onLook")));
        assert_eq!(handler.to_string(), "onLook#3");

        drop(copy);
        assert_eq!(handler.ref_count(), 1);
    }
}
