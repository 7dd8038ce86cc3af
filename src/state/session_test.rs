use super::*;

fn stored() -> StoredSession {
    StoredSession {
        display_name: "Ada".to_owned(),
        session_id: "abc123".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_state_defaults() {
    let s = SessionState::default();
    assert_eq!(s.phase, SessionPhase::Closed);
    assert!(s.display_name.is_none());
    assert!(s.session_id.is_none());
    assert_eq!(s.connection, ConnectionStatus::Disconnected);
}

// =============================================================
// Resume path
// =============================================================

#[test]
fn open_with_stored_session_resumes() {
    let mut s = SessionState::default();
    let action = s.open(Some(stored()));

    assert_eq!(action, OpenAction::Resume { session_id: "abc123".to_owned() });
    assert_eq!(s.phase, SessionPhase::Resuming);
    assert_eq!(s.display_name.as_deref(), Some("Ada"));
    assert_eq!(s.session_id.as_deref(), Some("abc123"));
}

#[test]
fn resume_path_never_creates_a_session() {
    let mut s = SessionState::default();
    s.open(Some(stored()));
    // A send during/after resume must not claim a creation call.
    assert!(s.begin_create().is_none());
    s.resumed();
    assert!(s.is_active());
    assert!(s.begin_create().is_none());
}

#[test]
fn resumed_only_applies_from_resuming() {
    let mut s = SessionState::default();
    s.resumed();
    assert_eq!(s.phase, SessionPhase::Closed);
}

// =============================================================
// New-session path
// =============================================================

#[test]
fn open_without_stored_session_prompts_for_name() {
    let mut s = SessionState::default();
    let action = s.open(None);

    assert_eq!(action, OpenAction::PromptForName);
    assert_eq!(s.phase, SessionPhase::AwaitingName);
    assert!(s.session_id.is_none());
}

#[test]
fn submit_name_trims_and_records() {
    let mut s = SessionState::default();
    s.open(None);
    assert!(s.submit_name("  Ada  "));
    assert_eq!(s.display_name.as_deref(), Some("Ada"));
}

#[test]
fn submit_name_rejects_blank_input() {
    let mut s = SessionState::default();
    s.open(None);
    assert!(!s.submit_name("   "));
    assert!(s.display_name.is_none());
}

#[test]
fn begin_create_fires_exactly_once() {
    let mut s = SessionState::default();
    s.open(None);
    s.submit_name("Ada");

    assert!(s.begin_create().is_some());
    // Second send while the creation request is in flight.
    assert!(s.begin_create().is_none());
}

#[test]
fn begin_create_requires_a_name() {
    let mut s = SessionState::default();
    s.open(None);
    assert!(s.begin_create().is_none());
}

#[test]
fn create_succeeded_activates_and_yields_pair_to_persist() {
    let mut s = SessionState::default();
    s.open(None);
    s.submit_name("Ada");
    let ticket = s.begin_create().expect("claim");

    let pair = s.create_succeeded(ticket, "abc123".to_owned()).expect("stored pair");
    assert_eq!(pair, stored());
    assert!(s.is_active());
    // The session exists now; no further creation calls.
    assert!(s.begin_create().is_none());
}

#[test]
fn create_failed_stays_awaiting_name_and_allows_retry() {
    let mut s = SessionState::default();
    s.open(None);
    s.submit_name("Ada");
    let ticket = s.begin_create().expect("claim");

    assert!(s.create_failed(ticket));
    assert_eq!(s.phase, SessionPhase::AwaitingName);
    assert!(!s.is_active());
    // Retry claims a fresh creation call.
    assert!(s.begin_create().is_some());
}

#[test]
fn abandoned_mint_result_is_rejected_after_close_and_reopen() {
    let mut s = SessionState::default();
    s.open(None);
    s.submit_name("Ada");
    let first = s.begin_create().expect("first claim");

    // Widget closed with the mint still in flight, then reopened under a
    // different name; a fresh attempt is claimable.
    s.close();
    s.open(None);
    s.submit_name("Bea");
    let second = s.begin_create().expect("second claim");

    // The first attempt's late success must not apply to the new attempt.
    assert!(s.create_succeeded(first, "sess-a".to_owned()).is_none());
    assert_eq!(s.phase, SessionPhase::AwaitingName);
    assert!(s.session_id.is_none());

    // The live attempt still completes normally.
    let pair = s.create_succeeded(second, "sess-b".to_owned()).expect("live attempt");
    assert_eq!(pair.display_name, "Bea");
    assert_eq!(pair.session_id, "sess-b");
    assert!(s.is_active());
}

#[test]
fn stale_failure_leaves_live_attempt_pending() {
    let mut s = SessionState::default();
    s.open(None);
    s.submit_name("Ada");
    let first = s.begin_create().expect("first claim");
    s.close();
    s.open(None);
    s.submit_name("Bea");
    let second = s.begin_create().expect("second claim");

    // The abandoned attempt's failure is ignored and does not release the
    // live attempt's claim.
    assert!(!s.create_failed(first));
    assert!(s.begin_create().is_none());

    assert!(s.create_succeeded(second, "sess-b".to_owned()).is_some());
}

#[test]
fn stale_ticket_is_rejected_after_close_without_reopen() {
    let mut s = SessionState::default();
    s.open(None);
    s.submit_name("Ada");
    let ticket = s.begin_create().expect("claim");

    s.close();
    assert!(s.create_succeeded(ticket, "sess-a".to_owned()).is_none());
    assert_eq!(s.phase, SessionPhase::Closed);
    assert!(s.session_id.is_none());
}

// =============================================================
// Close and restart
// =============================================================

#[test]
fn close_preserves_resumable_identity() {
    let mut s = SessionState::default();
    s.open(Some(stored()));
    s.resumed();
    s.connection = ConnectionStatus::Connected;

    s.close();
    assert_eq!(s.phase, SessionPhase::Closed);
    assert_eq!(s.connection, ConnectionStatus::Disconnected);
    assert_eq!(s.display_name.as_deref(), Some("Ada"));
    assert_eq!(s.session_id.as_deref(), Some("abc123"));

    // A subsequent open with the same stored pair resumes, not re-prompts.
    let action = s.open(Some(stored()));
    assert_eq!(action, OpenAction::Resume { session_id: "abc123".to_owned() });
}

#[test]
fn restart_drops_everything() {
    let mut s = SessionState::default();
    s.open(Some(stored()));
    s.resumed();

    s.restart();
    assert_eq!(s.phase, SessionPhase::Closed);
    assert!(s.display_name.is_none());
    assert!(s.session_id.is_none());
}

#[test]
fn close_abandons_pending_creation() {
    let mut s = SessionState::default();
    s.open(None);
    s.submit_name("Ada");
    assert!(s.begin_create().is_some());

    s.close();
    s.open(None);
    s.submit_name("Ada");
    assert!(s.begin_create().is_some());
}
