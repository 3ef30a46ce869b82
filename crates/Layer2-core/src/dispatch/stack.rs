//! Dispatch Stack - 진행 중인 디스패치 호출 스택
//!
//! 핸들러가 새 이벤트를 디스패치하면 (중첩 디스패치) 프레임이 쌓이고,
//! 중첩 디스패치가 완전히 끝난 뒤 바깥 순회가 재개됩니다.

use crate::event::{EventCategory, EventId};
use parking_lot::Mutex;

/// 진행 중인 디스패치 하나
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchFrame {
    pub event_id: EventId,
    pub category: EventCategory,
}

/// 디스패치 호출 스택
#[derive(Debug, Default)]
pub struct DispatchStack {
    frames: Mutex<Vec<DispatchFrame>>,
}

impl DispatchStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 중첩 깊이 (0 = 디스패치 중 아님)
    pub fn depth(&self) -> usize {
        self.frames.lock().len()
    }

    /// 가장 안쪽 디스패치
    pub fn current(&self) -> Option<DispatchFrame> {
        self.frames.lock().last().copied()
    }

    /// 바깥쪽부터 전체 프레임
    pub fn frames(&self) -> Vec<DispatchFrame> {
        self.frames.lock().clone()
    }

    /// 프레임 push, 가드가 drop될 때 pop (핸들러 panic 시에도)
    pub(crate) fn enter(&self, frame: DispatchFrame) -> FrameGuard<'_> {
        self.frames.lock().push(frame);
        FrameGuard { stack: self }
    }
}

pub(crate) struct FrameGuard<'a> {
    stack: &'a DispatchStack,
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.stack.frames.lock().pop();
    }
}
