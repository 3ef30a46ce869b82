//! Dispatch Engine - 이벤트를 리스너 목록으로 라우팅
//!
//! ## 순서
//! 1. 목록이 비어 있으면 즉시 `false` (마샬링 없음)
//! 2. 등록 순서대로 순회, 비활성 리스너는 방문 시점에 건너뜀
//! 3. criteria를 카테고리 타입으로 꺼내 매칭 (타입 불일치는 panic)
//! 4. 매칭되면 push → invoke → update
//! 5. handled를 돌려준 리스너가 있으면 즉시 `true`
//! 6. 끝까지 handled가 없으면 `false`

use super::stack::{DispatchFrame, DispatchStack};
use super::stats::{DispatchStats, DispatchStatsSnapshot};
use crate::event::ScriptEvent;
use crate::filter::EventCriteria;
use crate::listener::{ListenerHandle, ListenerRegistry};
use crate::marshal::{self, CallOutcome, ScriptRuntime};
use otscript_foundation::DispatchConfig;
use std::sync::Arc;
use tracing::{debug, error, trace, warn};

/// 이벤트 디스패처
///
/// ## 사용법
/// ```ignore
/// let registry = Arc::new(ListenerRegistry::new());
/// let dispatcher = Dispatcher::new(registry.clone());
///
/// let mut event = OnSay::new(speaker, SpeakClass::Say, None, "hi");
/// let handled = dispatcher.dispatch(&mut event, &mut runtime);
/// if event.should_propagate(handled) {
///     // 기본 동작 진행
/// }
/// ```
pub struct Dispatcher {
    registry: Arc<ListenerRegistry>,
    config: DispatchConfig,
    stack: DispatchStack,
    stats: DispatchStats,
}

impl Dispatcher {
    /// 기본 설정으로 생성
    pub fn new(registry: Arc<ListenerRegistry>) -> Self {
        Self::with_config(registry, DispatchConfig::default())
    }

    /// 커스텀 설정으로 생성
    ///
    /// `max_depth`가 0이면 최상위 디스패치도 거부되므로 1로 올립니다.
    pub fn with_config(registry: Arc<ListenerRegistry>, mut config: DispatchConfig) -> Self {
        if config.max_depth == 0 {
            warn!("Dispatch maxDepth 0 would reject every event, using 1");
            config.max_depth = 1;
        }
        Self {
            registry,
            config,
            stack: DispatchStack::new(),
            stats: DispatchStats::default(),
        }
    }

    pub fn registry(&self) -> &Arc<ListenerRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// 현재 중첩 깊이
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// 가장 안쪽에서 진행 중인 디스패치
    pub fn current(&self) -> Option<DispatchFrame> {
        self.stack.current()
    }

    pub fn stats(&self) -> DispatchStatsSnapshot {
        self.stats.snapshot()
    }

    /// 레지스트리에서 이벤트 카테고리의 리스너를 찾아 디스패치
    pub fn dispatch<E: ScriptEvent>(&self, event: &mut E, runtime: &mut dyn ScriptRuntime) -> bool {
        let listeners = self.registry.lookup(E::CATEGORY);
        self.dispatch_list(event, runtime, &listeners)
    }

    /// 주어진 리스너 목록으로 디스패치
    ///
    /// # Panics
    ///
    /// 목록에 다른 카테고리의 리스너가 있거나, 리스너의 criteria 타입이
    /// 카테고리와 맞지 않으면 panic (등록 계약 위반)
    pub fn dispatch_list<E: ScriptEvent>(
        &self,
        event: &mut E,
        runtime: &mut dyn ScriptRuntime,
        listeners: &[ListenerHandle],
    ) -> bool {
        self.stats.record_dispatch();

        if listeners.is_empty() {
            return false;
        }

        let depth = self.stack.depth();
        if depth >= self.config.max_depth {
            self.stats.record_depth_exceeded();
            error!(
                event_id = %event.id(),
                category = %E::CATEGORY,
                depth,
                max_depth = self.config.max_depth,
                "Nested dispatch depth exceeded, treating event as unhandled"
            );
            return false;
        }

        let _frame = self.stack.enter(DispatchFrame {
            event_id: event.id(),
            category: E::CATEGORY,
        });

        for listener in listeners {
            assert_eq!(
                listener.category(),
                E::CATEGORY,
                "{} registered for {} was dispatched with a {} event",
                listener.id(),
                listener.category(),
                E::CATEGORY
            );

            if !listener.is_active() {
                continue;
            }

            let criteria = E::Criteria::extract(listener.criteria()).unwrap_or_else(|| {
                panic!(
                    "{} holds {} criteria, which {} cannot match",
                    listener.id(),
                    listener.criteria().map_or("no", |c| c.kind()),
                    E::CATEGORY
                )
            });

            if !event.check_match(criteria) {
                continue;
            }

            if self.config.trace_listeners {
                trace!(
                    event_id = %event.id(),
                    listener_id = %listener.id(),
                    handler = %listener.handler(),
                    depth = depth + 1,
                    "Invoking script listener"
                );
            }

            self.stats.record_invocation();
            match marshal::call(event, runtime, listener) {
                CallOutcome::Handled => {
                    self.stats.record_handled();
                    debug!(
                        event_id = %event.id(),
                        category = %E::CATEGORY,
                        listener_id = %listener.id(),
                        "Event handled by script listener"
                    );
                    return true;
                }
                CallOutcome::Unhandled => {}
                CallOutcome::Failed => self.stats.record_failure(),
            }
        }

        false
    }
}

// ============================================================================
// 테스트
// ============================================================================
