use super::*;

#[test]
fn push_returns_distinct_ids() {
    let mut stack = ToastStack::default();
    let first = stack.success("Published");
    let second = stack.error("Failed");
    assert_ne!(first, second);
    assert_eq!(stack.toasts.len(), 2);
}

#[test]
fn levels_are_recorded() {
    let mut stack = ToastStack::default();
    stack.success("ok");
    stack.error("nope");
    assert_eq!(stack.toasts[0].level, ToastLevel::Success);
    assert_eq!(stack.toasts[1].level, ToastLevel::Error);
}

#[test]
fn dismiss_removes_only_the_named_toast() {
    let mut stack = ToastStack::default();
    let first = stack.success("one");
    let second = stack.success("two");
    stack.dismiss(first);
    assert_eq!(stack.toasts.len(), 1);
    assert_eq!(stack.toasts[0].id, second);
}

#[test]
fn dismissing_unknown_id_is_noop() {
    let mut stack = ToastStack::default();
    stack.success("one");
    stack.dismiss(Uuid::new_v4());
    assert_eq!(stack.toasts.len(), 1);
}
