//! 디스패치 통합 테스트
//!
//! 레지스트리 + 디스패처 + 네이티브 런타임을 묶어 순서, 단락, 필터,
//! 중첩 디스패치 동작을 검증합니다.

use otscript_core::{
    Creature, Dispatcher, EventCategory, HandlerRef, Item, ItemIdentity, ListenerHandle,
    ListenerRegistry, NativeRuntime, NoCriteria, OnLogin, OnSay, OnUseItem, Player, ReturnValue,
    ScriptConfig, ScriptContext, ScriptError, ScriptEvent, ScriptReturn, ScriptRuntime, SpeakClass,
    StringFilter,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// Helpers
// ============================================================================

fn setup() -> (Arc<ListenerRegistry>, Dispatcher, NativeRuntime) {
    let registry = Arc::new(ListenerRegistry::new());
    let dispatcher = Dispatcher::new(Arc::clone(&registry));
    (registry, dispatcher, NativeRuntime::new())
}

fn say(text: &str) -> OnSay {
    OnSay::new(Creature::new(1, "Alice"), SpeakClass::Say, None, text)
}

fn use_item(unique_id: u16) -> OnUseItem {
    OnUseItem::new(
        Player::new(1, "Alice"),
        Item::new(2400).with_unique_id(unique_id),
        None,
    )
}

fn pass(_: &ScriptContext) -> Result<ScriptReturn, ScriptError> {
    Ok(ScriptReturn::unhandled())
}

fn consume(_: &ScriptContext) -> Result<ScriptReturn, ScriptError> {
    Ok(ScriptReturn::handled())
}

// ============================================================================
// 순서 / 매칭
// ============================================================================

#[test]
fn test_no_listeners_returns_false() {
    let (registry, dispatcher, mut runtime) = setup();

    let mut event = say("hello");
    assert!(!dispatcher.dispatch(&mut event, &mut runtime));
    assert!(!dispatcher.dispatch(&mut event, &mut runtime));

    assert_eq!(runtime.total_calls(), 0);
    assert_eq!(event.text(), "hello");
    assert!(registry.is_empty());
    assert!(event.should_propagate(false));
}

#[test]
fn test_only_matching_listener_runs() {
    let (registry, dispatcher, mut runtime) = setup();

    let first = runtime.add("first", pass);
    let second = runtime.add("second", pass);
    let third = runtime.add("third", pass);
    registry.register::<OnSay>(StringFilter::exact("bye"), first.clone());
    registry.register::<OnSay>(StringFilter::exact("hello"), second.clone());
    registry.register::<OnSay>(StringFilter::prefix("xyz"), third.clone());

    let mut event = say("hello");
    assert!(!dispatcher.dispatch(&mut event, &mut runtime));

    assert_eq!(runtime.call_count(&first), 0);
    assert_eq!(runtime.call_count(&second), 1);
    assert_eq!(runtime.call_count(&third), 0);
}

#[test]
fn test_inactive_listener_is_skipped() {
    let (registry, dispatcher, mut runtime) = setup();

    let first = runtime.add("first", consume);
    let second = runtime.add("second", pass);
    let listener = registry.register::<OnSay>(StringFilter::all(), first.clone());
    registry.register::<OnSay>(StringFilter::all(), second.clone());
    assert!(registry.deactivate(&listener));

    let mut event = say("anything");
    assert!(!dispatcher.dispatch(&mut event, &mut runtime));

    assert_eq!(runtime.call_count(&first), 0);
    assert_eq!(runtime.call_count(&second), 1);
    assert_eq!(registry.len(EventCategory::OnSay), 2);
    assert_eq!(registry.active_count(EventCategory::OnSay), 1);
}

#[test]
fn test_handled_stops_iteration() {
    let (registry, dispatcher, mut runtime) = setup();

    let a = runtime.add("a", pass);
    let b = runtime.add("b", consume);
    let c = runtime.add("c", pass);
    for handler in [&a, &b, &c] {
        registry.register::<OnSay>(StringFilter::all(), handler.clone());
    }

    let mut event = say("hi");
    assert!(dispatcher.dispatch(&mut event, &mut runtime));

    assert_eq!(runtime.invocation_names(), vec!["a", "b"]);
    assert_eq!(runtime.call_count(&c), 0);
    assert!(!event.should_propagate(true));
}

#[test]
fn test_mutations_accumulate_across_listeners() {
    let (registry, dispatcher, mut runtime) = setup();
    let observed = Rc::new(RefCell::new(None));

    let rewrite = runtime.add("rewrite", |_| {
        Ok(ScriptReturn::unhandled().with_value("text", "X"))
    });
    let seen = Rc::clone(&observed);
    let observe = runtime.add("observe", move |ctx| {
        *seen.borrow_mut() = ctx.get_str("text").map(str::to_string);
        Ok(ScriptReturn::unhandled())
    });
    registry.register::<OnSay>(StringFilter::all(), rewrite);
    registry.register::<OnSay>(StringFilter::all(), observe);

    let mut event = say("original");
    assert!(!dispatcher.dispatch(&mut event, &mut runtime));

    assert_eq!(observed.borrow().as_deref(), Some("X"));
    assert_eq!(event.text(), "X");
}

#[test]
fn test_later_listener_matches_against_mutated_text() {
    let (registry, dispatcher, mut runtime) = setup();

    let rewrite = runtime.add("rewrite", |_| {
        Ok(ScriptReturn::unhandled().with_value("text", "!help"))
    });
    let command = runtime.add("command", consume);
    registry.register::<OnSay>(StringFilter::all(), rewrite);
    registry.register::<OnSay>(StringFilter::exact("!help"), command.clone());

    let mut event = say("help me");
    assert!(dispatcher.dispatch(&mut event, &mut runtime));
    assert_eq!(runtime.call_count(&command), 1);
}

#[test]
fn test_case_insensitive_exact_match() {
    let (registry, dispatcher, mut runtime) = setup();

    let loose = runtime.add("loose", pass);
    let strict = runtime.add("strict", pass);
    registry.register::<OnSay>(StringFilter::exact("hello"), loose.clone());
    registry.register::<OnSay>(StringFilter::exact("hello").case_sensitive(true), strict.clone());

    let mut event = say("Hello");
    dispatcher.dispatch(&mut event, &mut runtime);

    assert_eq!(runtime.call_count(&loose), 1);
    assert_eq!(runtime.call_count(&strict), 0);
}

#[test]
fn test_unique_id_filter() {
    let (registry, dispatcher, mut runtime) = setup();

    let door = runtime.add("door", |_| {
        Ok(ScriptReturn::handled().with_value("retval", "not_possible"))
    });
    registry.register::<OnUseItem>(ItemIdentity::unique_id(42), door.clone());

    for unique_id in [41, 43] {
        let mut event = use_item(unique_id);
        assert!(!dispatcher.dispatch(&mut event, &mut runtime));
        assert_eq!(event.retval(), ReturnValue::NoError);
        assert!(!event.should_propagate(false));
    }
    assert_eq!(runtime.call_count(&door), 0);

    let mut event = use_item(42);
    assert!(dispatcher.dispatch(&mut event, &mut runtime));
    assert_eq!(event.retval(), ReturnValue::NotPossible);
    assert_eq!(runtime.call_count(&door), 1);
}

// ============================================================================
// 실패 / 등록 경계
// ============================================================================

#[test]
fn test_failing_handler_is_isolated() {
    let (registry, dispatcher, mut runtime) = setup();

    let broken = runtime.add("broken", |_| {
        Err(ScriptError::InvalidReturn("attempt to index a nil value".into()))
    });
    let after = runtime.add("after", pass);
    registry.register::<OnLogin>(NoCriteria, broken);
    registry.register::<OnLogin>(NoCriteria, after.clone());

    let mut event = OnLogin::new(Player::new(5, "Bob"));
    assert!(!dispatcher.dispatch(&mut event, &mut runtime));

    assert_eq!(runtime.call_count(&after), 1);
    assert_eq!(runtime.errors().len(), 1);
    assert_eq!(dispatcher.stats().failures, 1);
}

#[test]
fn test_failed_handler_outputs_are_discarded() {
    let (registry, dispatcher, mut runtime) = setup();

    // 핸들러가 없는 참조는 HandlerNotFound로 실패
    let missing = HandlerRef::new(999, "missing");
    registry.register::<OnSay>(StringFilter::all(), missing);

    let mut event = say("keep me");
    assert!(!dispatcher.dispatch(&mut event, &mut runtime));
    assert_eq!(event.text(), "keep me");
    assert!(matches!(runtime.errors(), [ScriptError::HandlerNotFound(_)]));
}

#[test]
fn test_listener_registered_during_dispatch_runs_next_time() {
    let (registry, dispatcher, mut runtime) = setup();

    let late = runtime.add("late", pass);
    let registered = Rc::new(Cell::new(false));

    let reg = Arc::clone(&registry);
    let flag = Rc::clone(&registered);
    let late_ref = late.clone();
    let adder = runtime.add("adder", move |_| {
        if !flag.replace(true) {
            reg.register::<OnLogin>(NoCriteria, late_ref.clone());
        }
        Ok(ScriptReturn::unhandled())
    });
    registry.register::<OnLogin>(NoCriteria, adder);

    let mut event = OnLogin::new(Player::new(5, "Bob"));
    dispatcher.dispatch(&mut event, &mut runtime);
    assert_eq!(runtime.call_count(&late), 0);
    assert_eq!(registry.len(EventCategory::OnLogin), 2);

    dispatcher.dispatch(&mut event, &mut runtime);
    assert_eq!(runtime.call_count(&late), 1);
}

#[test]
fn test_register_dyn_then_dispatch() -> anyhow::Result<()> {
    let (registry, dispatcher, mut runtime) = setup();

    let handler = runtime.add("dyn", consume);
    let category: EventCategory = "OnSay".parse()?;
    registry.register_dyn(category, Some(StringFilter::substring("gold").into()), handler)?;

    assert!(registry
        .register_dyn(EventCategory::OnLogin, Some(StringFilter::all().into()), HandlerRef::new(0, "bad"))
        .is_err());

    let mut event = say("I want GOLD");
    assert!(dispatcher.dispatch(&mut event, &mut runtime));
    Ok(())
}

#[test]
fn test_deactivate_handler_removes_all_its_listeners() {
    let (registry, dispatcher, mut runtime) = setup();

    let shared = runtime.add("shared", consume);
    registry.register::<OnSay>(StringFilter::exact("a"), shared.clone());
    registry.register::<OnSay>(StringFilter::exact("b"), shared.clone());
    registry.register::<OnLogin>(NoCriteria, shared.clone());

    assert_eq!(registry.deactivate_handler(&shared), 3);
    assert_eq!(registry.deactivate_handler(&shared), 0);

    let mut event = say("a");
    assert!(!dispatcher.dispatch(&mut event, &mut runtime));
    assert_eq!(runtime.total_calls(), 0);
}

// ============================================================================
// 중첩 디스패치
// ============================================================================

/// `trigger` 핸들러가 호출되면 OnLogin을 중첩 디스패치하는 런타임
struct NestingRuntime {
    dispatcher: Arc<Dispatcher>,
    native: NativeRuntime,
    trigger: HandlerRef,
}

impl ScriptRuntime for NestingRuntime {
    fn invoke(
        &mut self,
        handler: &HandlerRef,
        context: &ScriptContext,
    ) -> Result<ScriptReturn, ScriptError> {
        if handler.same_as(&self.trigger) {
            let dispatcher = Arc::clone(&self.dispatcher);
            let mut nested = OnLogin::new(Player::new(7, "Nested"));
            let handled = dispatcher.dispatch(&mut nested, self);
            return Ok(ScriptReturn::unhandled().with_value("nested", handled));
        }
        self.native.invoke(handler, context)
    }
}

#[test]
fn test_nested_dispatch_honors_deactivation() {
    let registry = Arc::new(ListenerRegistry::new());
    let dispatcher = Arc::new(Dispatcher::new(Arc::clone(&registry)));
    let mut native = NativeRuntime::new();

    let trigger = HandlerRef::new(-1, "trigger");
    let victim = native.add("victim", consume);
    registry.register::<OnSay>(StringFilter::all(), trigger.clone());
    let victim_listener: ListenerHandle = registry.register::<OnSay>(StringFilter::all(), victim.clone());

    let nested_depth = Rc::new(Cell::new(0));
    let depth = Rc::clone(&nested_depth);
    let reg = Arc::clone(&registry);
    let disp = Arc::clone(&dispatcher);
    let login = native.add("login", move |ctx| {
        depth.set(disp.depth());
        assert_eq!(disp.current().map(|frame| frame.event_id), Some(ctx.event_id()));
        reg.deactivate(&victim_listener);
        Ok(ScriptReturn::handled())
    });
    registry.register::<OnLogin>(NoCriteria, login.clone());

    let mut runtime = NestingRuntime {
        dispatcher: Arc::clone(&dispatcher),
        native,
        trigger,
    };

    let mut event = say("hi");
    assert!(!dispatcher.dispatch(&mut event, &mut runtime));

    assert_eq!(nested_depth.get(), 2);
    assert_eq!(runtime.native.call_count(&login), 1);
    assert_eq!(runtime.native.call_count(&victim), 0);
    assert_eq!(dispatcher.depth(), 0);

    let stats = dispatcher.stats();
    assert_eq!(stats.dispatches, 2);
    assert_eq!(stats.handled, 1);
}

#[test]
fn test_nested_dispatch_depth_limit() -> anyhow::Result<()> {
    let config = ScriptConfig::from_toml_str("[dispatch]\nmaxDepth = 1\n")?;
    let registry = Arc::new(ListenerRegistry::new());
    let dispatcher = Arc::new(Dispatcher::with_config(Arc::clone(&registry), config.dispatch));
    let mut native = NativeRuntime::new();

    let trigger = HandlerRef::new(-1, "trigger");
    registry.register::<OnSay>(StringFilter::all(), trigger.clone());
    let login = native.add("login", consume);
    registry.register::<OnLogin>(NoCriteria, login.clone());

    let mut runtime = NestingRuntime {
        dispatcher: Arc::clone(&dispatcher),
        native,
        trigger,
    };

    let mut event = say("hi");
    assert!(!dispatcher.dispatch(&mut event, &mut runtime));

    assert_eq!(runtime.native.call_count(&login), 0);
    assert_eq!(dispatcher.stats().depth_exceeded, 1);
    assert_eq!(dispatcher.depth(), 0);
    Ok(())
}

// ============================================================================
// 프로그래밍 에러
// ============================================================================

#[test]
#[should_panic]
fn test_wrong_category_list_panics() {
    let (registry, dispatcher, mut runtime) = setup();
    registry.register::<OnUseItem>(ItemIdentity::item_id(2400), HandlerRef::new(1, "use"));

    let wrong = registry.lookup(EventCategory::OnUseItem);
    let mut event = say("hi");
    dispatcher.dispatch_list(&mut event, &mut runtime, &wrong);
}

// ============================================================================
// 설정 파일
// ============================================================================

#[test]
fn test_dispatcher_from_config_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("otscript.json");
    std::fs::write(
        &path,
        r#"{ "dispatch": { "traceListeners": true }, "logging": { "level": "trace" } }"#,
    )?;

    let config = ScriptConfig::load(&path)?;
    // 다른 테스트가 먼저 설치했을 수 있음
    let _ = otscript_foundation::logging::init(&config.logging);

    let registry = Arc::new(ListenerRegistry::new());
    let dispatcher = Dispatcher::with_config(Arc::clone(&registry), config.dispatch);
    assert!(dispatcher.config().trace_listeners);
    assert_eq!(dispatcher.config().max_depth, 32);

    let mut runtime = NativeRuntime::new();
    let handler = runtime.add("traced", consume);
    registry.register::<OnLogin>(NoCriteria, handler);

    let mut event = OnLogin::new(Player::new(3, "Traced"));
    assert!(dispatcher.dispatch(&mut event, &mut runtime));
    Ok(())
}
