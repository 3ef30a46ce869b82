//! Native Runtime - Rust 클로저 핸들러
//!
//! 스크립트 엔진 없이 Rust 클로저를 핸들러로 등록합니다.
//! 서버 내장 핸들러나 테스트에서 사용합니다.

use super::context::{ScriptContext, ScriptReturn};
use super::runtime::{ScriptError, ScriptRuntime};
use crate::listener::HandlerRef;
use std::collections::HashMap;
use tracing::warn;

/// 네이티브 핸들러 타입
pub type NativeHandler = Box<dyn FnMut(&ScriptContext) -> Result<ScriptReturn, ScriptError>>;

struct NativeEntry {
    handler: NativeHandler,
    calls: usize,
}

/// 클로저 기반 런타임
#[derive(Default)]
pub struct NativeRuntime {
    handlers: HashMap<i64, NativeEntry>,
    next_key: i64,
    invocations: Vec<HandlerRef>,
    errors: Vec<ScriptError>,
}

impl NativeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// 핸들러 추가, 리스너 등록에 쓸 참조 반환
    pub fn add<F>(&mut self, name: impl Into<String>, handler: F) -> HandlerRef
    where
        F: FnMut(&ScriptContext) -> Result<ScriptReturn, ScriptError> + 'static,
    {
        self.next_key += 1;
        let key = self.next_key;
        self.handlers.insert(
            key,
            NativeEntry {
                handler: Box::new(handler),
                calls: 0,
            },
        );
        HandlerRef::new(key, name)
    }

    /// 핸들러 제거 (이후 호출은 HandlerNotFound)
    pub fn remove(&mut self, handler: &HandlerRef) -> bool {
        self.handlers.remove(&handler.key()).is_some()
    }

    /// 핸들러 호출 횟수
    pub fn call_count(&self, handler: &HandlerRef) -> usize {
        self.handlers
            .get(&handler.key())
            .map_or(0, |entry| entry.calls)
    }

    /// 전체 호출 횟수
    pub fn total_calls(&self) -> usize {
        self.invocations.len()
    }

    /// 호출된 순서대로 핸들러 이름
    pub fn invocation_names(&self) -> Vec<&str> {
        self.invocations.iter().map(HandlerRef::name).collect()
    }

    /// 보고된 핸들러 에러
    pub fn errors(&self) -> &[ScriptError] {
        &self.errors
    }
}

impl ScriptRuntime for NativeRuntime {
    fn invoke(
        &mut self,
        handler: &HandlerRef,
        context: &ScriptContext,
    ) -> Result<ScriptReturn, ScriptError> {
        let entry = self
            .handlers
            .get_mut(&handler.key())
            .ok_or_else(|| ScriptError::HandlerNotFound(handler.to_string()))?;

        entry.calls += 1;
        self.invocations.push(handler.clone());
        (entry.handler)(context)
    }

    fn report_error(&mut self, handler: &HandlerRef, context: &ScriptContext, error: &ScriptError) {
        warn!(
            handler = %handler,
            event_id = %context.event_id(),
            error = %error,
            "Native handler failed"
        );
        self.errors.push(error.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventCategory, EventHeader};

    #[test]
    fn test_invoke_counts_calls() {
        let mut runtime = NativeRuntime::new();
        let handler = runtime.add("greet", |_| Ok(ScriptReturn::handled()));
        let ctx = ScriptContext::new(&EventHeader::new(EventCategory::OnLogin, true));

        let result = runtime.invoke(&handler, &ctx).unwrap();
        assert!(result.is_handled());
        assert_eq!(runtime.call_count(&handler), 1);
        assert_eq!(runtime.invocation_names(), vec!["greet"]);
    }

    #[test]
    fn test_removed_handler_not_found() {
        let mut runtime = NativeRuntime::new();
        let handler = runtime.add("gone", |_| Ok(ScriptReturn::unhandled()));
        assert!(runtime.remove(&handler));

        let ctx = ScriptContext::new(&EventHeader::new(EventCategory::OnLogin, true));
        let err = runtime.invoke(&handler, &ctx).unwrap_err();
        assert!(matches!(err, ScriptError::HandlerNotFound(_)));
    }
}
