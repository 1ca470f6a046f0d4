use super::*;

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().items.is_empty());
}

#[test]
fn push_appends_in_order_with_distinct_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Error, "first");
    let b = state.push(ToastLevel::Info, "second");
    assert_ne!(a, b);
    let messages: Vec<_> = state.items.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["first", "second"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Error, "first");
    state.push(ToastLevel::Error, "second");
    state.dismiss(&a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "second");
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastLevel::Error, "only");
    state.dismiss("missing");
    assert_eq!(state.items.len(), 1);
}

#[test]
fn level_classes_are_distinct() {
    assert_ne!(ToastLevel::Error.class(), ToastLevel::Info.class());
}
