//! 디스패치 통계

use std::sync::atomic::{AtomicU64, Ordering};

/// 디스패처 누적 카운터
#[derive(Debug, Default)]
pub struct DispatchStats {
    dispatches: AtomicU64,
    invocations: AtomicU64,
    handled: AtomicU64,
    failures: AtomicU64,
    depth_exceeded: AtomicU64,
}

/// 통계 스냅샷
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStatsSnapshot {
    /// dispatch 호출 수 (빈 목록 포함)
    pub dispatches: u64,
    /// 핸들러 호출 수
    pub invocations: u64,
    /// handled로 끝난 디스패치 수
    pub handled: u64,
    /// 실패한 핸들러 호출 수
    pub failures: u64,
    /// 깊이 제한으로 거부된 디스패치 수
    pub depth_exceeded: u64,
}

impl DispatchStats {
    pub(crate) fn record_dispatch(&self) {
        self.dispatches.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_invocation(&self) {
        self.invocations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_handled(&self) {
        self.handled.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_depth_exceeded(&self) {
        self.depth_exceeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> DispatchStatsSnapshot {
        DispatchStatsSnapshot {
            dispatches: self.dispatches.load(Ordering::Relaxed),
            invocations: self.invocations.load(Ordering::Relaxed),
            handled: self.handled.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            depth_exceeded: self.depth_exceeded.load(Ordering::Relaxed),
        }
    }
}
