use super::*;

#[test]
fn ui_state_defaults() {
    let s = UiState::default();
    assert!(!s.window_open);
    assert!(!s.name_prompt_open);
    assert!(s.notice.is_none());
}

#[test]
fn notice_shows_and_dismisses() {
    let mut s = UiState::default();
    s.show_notice("message not sent");
    assert_eq!(s.notice.as_deref(), Some("message not sent"));
    s.dismiss_notice();
    assert!(s.notice.is_none());
}
