use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeLevel::Info, "one");
    let b = state.push(NoticeLevel::Error, "two");
    assert!(b > a);
    assert_eq!(state.notices.len(), 2);
}

#[test]
fn dismiss_removes_only_that_notice() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeLevel::Info, "one");
    state.push(NoticeLevel::Success, "two");
    state.dismiss(a);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].text, "two");
    state.dismiss(999);
    assert_eq!(state.notices.len(), 1);
}

#[test]
fn queue_is_capped_dropping_oldest() {
    let mut state = NoticeState::default();
    for i in 0..(MAX_NOTICES + 2) {
        state.push(NoticeLevel::Info, format!("n{i}"));
    }
    assert_eq!(state.notices.len(), MAX_NOTICES);
    assert_eq!(state.notices[0].text, "n2");
}

#[test]
fn ids_keep_growing_after_dismissal() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeLevel::Info, "one");
    state.dismiss(a);
    assert!(state.push(NoticeLevel::Info, "two") > a);
}

#[test]
fn level_classes() {
    assert_eq!(NoticeLevel::Error.css_class(), "notice notice--error");
}
