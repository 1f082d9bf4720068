use super::*;
use dreams_shared::UserIdentity;

fn identity(uid: &str, email: &str, display_name: Option<&str>) -> UserIdentity {
    UserIdentity {
        uid: uid.to_string(),
        email: email.to_string(),
        display_name: display_name.map(str::to_string),
    }
}

#[test]
fn test_unknown_state_is_loading_and_anonymous() {
    let state = SessionState::unknown();
    assert!(state.is_loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.greeting(), None);
}

#[test]
fn test_emission_resolves_to_authenticated_view() {
    // The stream emits an identity: the view switches from the
    // anonymous controls to the greeting without any reload.
    let state = SessionState::resolved(Session::Authenticated(identity("u1", "a@b.com", None)));
    assert!(!state.is_loading);
    assert!(state.is_authenticated());
    assert_eq!(state.greeting(), Some("Hi, a@b.com".to_string()));
    assert_eq!(state.session.uid(), Some("u1"));
}

#[test]
fn test_emission_resolves_to_anonymous_view() {
    let state = SessionState::resolved(Session::Anonymous);
    assert!(!state.is_loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.greeting(), None);
    assert_eq!(state.session.uid(), None);
}

#[test]
fn test_greeting_prefers_display_name() {
    let state = SessionState::resolved(Session::Authenticated(identity(
        "u1",
        "a@b.com",
        Some("Alex"),
    )));
    assert_eq!(state.greeting(), Some("Hi, Alex".to_string()));
}

#[test]
fn test_each_emission_replaces_the_session() {
    let first = SessionState::resolved(Session::Authenticated(identity("u1", "a@b.com", None)));
    let second = SessionState::resolved(Session::Anonymous);
    // Replacement is wholesale, not a merge
    assert!(first.is_authenticated());
    assert!(!second.is_authenticated());
}
