//! Listener Registry - 카테고리별 리스너 목록
//!
//! ## 규칙
//! - 등록 순서 = 디스패치 순서 (재정렬 없음)
//! - 제거는 논리적 (active 플래그), 목록에서 빠지지 않음
//! - 핸들러 안에서 register/deactivate를 호출해도 안전
//!
//! `lookup`은 목록의 스냅샷을 돌려주므로 락을 잡은 채로 핸들러가
//! 실행되는 일이 없습니다. 디스패치 도중 등록된 리스너는 다음
//! 디스패치부터 보입니다.

use super::types::{HandlerRef, Listener, ListenerHandle, ListenerId};
use crate::event::{EventCategory, ScriptEvent};
use crate::filter::{EventCriteria, FilterCriteria};
use otscript_foundation::{Error, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// 리스너 레지스트리
///
/// ## 사용법
/// ```ignore
/// let registry = ListenerRegistry::new();
///
/// // 타입 지정 등록 (criteria 타입이 컴파일 타임에 검증됨)
/// let listener = registry.register::<OnSay>(StringFilter::exact("hi"), handler);
///
/// // 스크립트 쪽 동적 등록
/// let listener = registry.register_dyn(EventCategory::OnLogin, None, handler)?;
///
/// registry.deactivate(&listener);
/// ```
#[derive(Default)]
pub struct ListenerRegistry {
    lists: RwLock<HashMap<EventCategory, Vec<ListenerHandle>>>,
    next_id: AtomicU64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // 등록
    // ========================================================================

    /// 타입 지정 등록 (카테고리와 criteria가 항상 일치)
    pub fn register<E: ScriptEvent>(
        &self,
        criteria: E::Criteria,
        handler: HandlerRef,
    ) -> ListenerHandle {
        self.insert(E::CATEGORY, criteria.into_stored(), handler)
    }

    /// 동적 등록 (스크립트에서 카테고리 이름으로 등록할 때)
    ///
    /// criteria 종류가 카테고리와 맞지 않으면 `Error::CriteriaMismatch`,
    /// 매칭될 수 없는 값이면 `Error::InvalidCriteria`
    pub fn register_dyn(
        &self,
        category: EventCategory,
        criteria: Option<FilterCriteria>,
        handler: HandlerRef,
    ) -> Result<ListenerHandle> {
        if !FilterCriteria::fits(criteria.as_ref(), category) {
            let given = criteria.as_ref().map_or("no", FilterCriteria::kind);
            return Err(Error::criteria_mismatch(category.as_str(), given));
        }
        if let Some(criteria) = &criteria {
            criteria.validate()?;
        }
        Ok(self.insert(category, criteria, handler))
    }

    fn insert(
        &self,
        category: EventCategory,
        criteria: Option<FilterCriteria>,
        handler: HandlerRef,
    ) -> ListenerHandle {
        let id = ListenerId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let listener = Arc::new(Listener::new(id, category, criteria, handler));

        debug!(
            listener_id = %id,
            category = %category,
            handler = %listener.handler(),
            "Registering script listener"
        );

        self.lists
            .write()
            .entry(category)
            .or_default()
            .push(Arc::clone(&listener));

        listener
    }

    // ========================================================================
    // 비활성화
    // ========================================================================

    /// 리스너 비활성화 (목록에서는 제거하지 않음)
    pub fn deactivate(&self, listener: &Listener) -> bool {
        let was_active = listener.deactivate();
        if was_active {
            debug!(
                listener_id = %listener.id(),
                category = %listener.category(),
                "Deactivated script listener"
            );
        }
        was_active
    }

    /// 같은 핸들러를 쓰는 모든 리스너 비활성화, 비활성화된 수 반환
    pub fn deactivate_handler(&self, handler: &HandlerRef) -> usize {
        let lists = self.lists.read();
        lists
            .values()
            .flatten()
            .filter(|listener| listener.handler().same_as(handler))
            .filter(|listener| self.deactivate(listener))
            .count()
    }

    // ========================================================================
    // 조회
    // ========================================================================

    /// 카테고리의 리스너 목록 (등록 순서)
    pub fn lookup(&self, category: EventCategory) -> Vec<ListenerHandle> {
        self.lists
            .read()
            .get(&category)
            .cloned()
            .unwrap_or_default()
    }

    /// ID로 리스너 조회
    pub fn listener(&self, id: ListenerId) -> Option<ListenerHandle> {
        self.lists
            .read()
            .values()
            .flatten()
            .find(|listener| listener.id() == id)
            .cloned()
    }

    /// 카테고리의 전체 리스너 수 (비활성 포함)
    pub fn len(&self, category: EventCategory) -> usize {
        self.lists.read().get(&category).map_or(0, Vec::len)
    }

    /// 카테고리의 활성 리스너 수
    pub fn active_count(&self, category: EventCategory) -> usize {
        self.lists.read().get(&category).map_or(0, |list| {
            list.iter().filter(|listener| listener.is_active()).count()
        })
    }

    /// 등록된 리스너가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.lists.read().values().all(Vec::is_empty)
    }
}
