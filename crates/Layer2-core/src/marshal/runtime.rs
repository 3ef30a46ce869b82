//! Script Runtime - 외부 스크립트 런타임 경계
//!
//! 디스패치 엔진은 런타임에 대해 세 가지만 요구합니다:
//! 1. 이벤트 페이로드를 순서 있는 인자 목록으로 전달 (`ScriptContext`)
//! 2. 핸들러를 동기 호출해 handled / unhandled / error 판정 받기
//! 3. 호출 후 이름 붙은 출력 값 돌려받기 (`ScriptReturn`)

use super::context::{ScriptContext, ScriptReturn};
use crate::event::ScriptEvent;
use crate::listener::{HandlerRef, Listener};
use thiserror::Error;
use tracing::{trace, warn};

// ============================================================================
// ScriptError
// ============================================================================

/// 핸들러 실행 에러 (해당 리스너에 한정됨)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScriptError {
    #[error("Script error in {handler}: {message}")]
    Runtime { handler: String, message: String },

    #[error("Handler not found: {0}")]
    HandlerNotFound(String),

    #[error("Invalid return value: {0}")]
    InvalidReturn(String),
}

impl ScriptError {
    /// 런타임 에러 생성 헬퍼
    pub fn runtime(handler: &HandlerRef, message: impl Into<String>) -> Self {
        ScriptError::Runtime {
            handler: handler.to_string(),
            message: message.into(),
        }
    }
}

// ============================================================================
// ScriptRuntime Trait
// ============================================================================

/// 스크립트 실행 런타임
///
/// 핸들러는 이 호출 안에서 끝까지 실행됩니다 (타임아웃은 런타임 책임).
/// 핸들러가 새 이벤트를 디스패치하려면 `invoke` 안에서 자기 자신을
/// 런타임으로 넘겨 `Dispatcher::dispatch`를 호출하면 됩니다.
pub trait ScriptRuntime {
    /// 핸들러 동기 호출
    fn invoke(
        &mut self,
        handler: &HandlerRef,
        context: &ScriptContext,
    ) -> Result<ScriptReturn, ScriptError>;

    /// 핸들러 실패 보고 (기본: 경고 로그)
    fn report_error(&mut self, handler: &HandlerRef, context: &ScriptContext, error: &ScriptError) {
        warn!(
            handler = %handler,
            event_id = %context.event_id(),
            category = %context.category(),
            error = %error,
            "Script handler failed"
        );
    }
}

// ============================================================================
// call - push → invoke → update
// ============================================================================

/// 리스너 한 번 호출 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// 이벤트 소비 (디스패치 중단)
    Handled,
    /// 처리하지 않음
    Unhandled,
    /// 핸들러 실패 (unhandled로 취급)
    Failed,
}

impl CallOutcome {
    pub fn is_handled(self) -> bool {
        matches!(self, CallOutcome::Handled)
    }
}

/// 매칭된 리스너 하나에 대해 마샬링 + 호출
///
/// 실패한 핸들러의 출력은 이벤트에 반영하지 않습니다.
pub fn call<E: ScriptEvent>(
    event: &mut E,
    runtime: &mut dyn ScriptRuntime,
    listener: &Listener,
) -> CallOutcome {
    let mut context = ScriptContext::new(event.header());
    event.push(&mut context);

    match runtime.invoke(listener.handler(), &context) {
        Ok(result) => {
            event.update(&result);
            trace!(
                listener_id = %listener.id(),
                event_id = %context.event_id(),
                handled = result.is_handled(),
                outputs = result.values().len(),
                "Listener returned"
            );
            if result.is_handled() {
                CallOutcome::Handled
            } else {
                CallOutcome::Unhandled
            }
        }
        Err(error) => {
            runtime.report_error(listener.handler(), &context, &error);
            CallOutcome::Failed
        }
    }
}
