//! Script Context - 핸들러 호출 인자/반환값
//!
//! `ScriptContext`는 이벤트 페이로드를 카테고리별 고정 순서로 담은 인자 목록,
//! `ScriptReturn`은 핸들러의 처리 여부와 이름 붙은 출력 값입니다.

use crate::event::{EventCategory, EventHeader, EventId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

// ============================================================================
// ScriptContext
// ============================================================================

/// push된 인자 하나
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptArg {
    pub name: &'static str,
    pub value: Value,
}

/// 핸들러 호출 컨텍스트 (순서 있는 인자 목록)
#[derive(Debug, Clone)]
pub struct ScriptContext {
    event_id: EventId,
    category: EventCategory,
    args: Vec<ScriptArg>,
}

impl ScriptContext {
    pub fn new(header: &EventHeader) -> Self {
        Self {
            event_id: header.id,
            category: header.category,
            args: Vec::new(),
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn category(&self) -> EventCategory {
        self.category
    }

    /// 인자 추가
    pub fn push(&mut self, name: &'static str, value: impl Into<Value>) -> &mut Self {
        self.args.push(ScriptArg {
            name,
            value: value.into(),
        });
        self
    }

    /// 직렬화 가능한 값 추가 (엔티티 등)
    pub fn push_serialized<T: Serialize>(&mut self, name: &'static str, value: &T) -> &mut Self {
        let value = to_value_or_null(name, value);
        self.push(name, value)
    }

    /// push 순서대로 인자 목록
    pub fn args(&self) -> &[ScriptArg] {
        &self.args
    }

    /// 이름으로 인자 조회
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.args
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// 이벤트 테이블 형태로 변환 (스크립트 쪽 `event` 객체)
    pub fn to_table(&self) -> Value {
        let mut table = Map::new();
        table.insert("id".to_string(), Value::from(self.event_id.value()));
        table.insert("name".to_string(), Value::from(self.category.as_str()));
        for arg in &self.args {
            table.insert(arg.name.to_string(), arg.value.clone());
        }
        Value::Object(table)
    }
}

/// 직렬화 실패 시 Null (스크립트 쪽에서는 nil)
fn to_value_or_null<T: Serialize>(name: &str, value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        debug!(name, error = %e, "Failed to serialize script value, passing null");
        Value::Null
    })
}

// ============================================================================
// ScriptReturn
// ============================================================================

/// 핸들러 반환값
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptReturn {
    handled: bool,
    values: Map<String, Value>,
}

impl ScriptReturn {
    /// 이벤트를 소비함 (이후 리스너 실행 중단)
    pub fn handled() -> Self {
        Self {
            handled: true,
            values: Map::new(),
        }
    }

    /// 처리하지 않음 (다음 리스너로 진행)
    pub fn unhandled() -> Self {
        Self::default()
    }

    /// 출력 값 설정
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// 출력 값 설정 (직렬화)
    pub fn with_serialized<T: Serialize>(self, key: impl Into<String>, value: &T) -> Self {
        let key = key.into();
        let value = to_value_or_null(&key, value);
        self.with_value(key, value)
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// 출력 값을 타입으로 읽기
    ///
    /// 값이 없거나 타입이 맞지 않으면 None (이벤트 필드는 그대로 유지)
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!(key, error = %e, "Ignoring script output with unexpected type");
                None
            }
        }
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }
}
