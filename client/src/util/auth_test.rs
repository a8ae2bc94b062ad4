use super::*;
use crate::net::types::User;

fn signed_in() -> AuthState {
    AuthState::resolved(Some(User {
        uid: "u1".to_owned(),
        email: Some("admin@example.com".to_owned()),
        display_name: None,
        id_token: "token".to_owned(),
        refresh_token: "refresh".to_owned(),
    }))
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&AuthState::resolved(None)));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn guard_decision_covers_all_states() {
    assert_eq!(guard_decision(&AuthState::default()), GuardDecision::Pending);
    assert_eq!(guard_decision(&AuthState::resolved(None)), GuardDecision::Redirect);
    assert_eq!(guard_decision(&signed_in()), GuardDecision::Render);
}

#[test]
fn latch_fires_exactly_once_while_unauthenticated() {
    let mut latch = RedirectLatch::default();
    let signed_out = AuthState::resolved(None);
    assert!(!latch.observe(&AuthState::default()));
    assert!(latch.observe(&signed_out));
    assert!(!latch.observe(&signed_out));
    assert!(!latch.observe(&signed_out));
}

#[test]
fn latch_rearms_after_sign_in() {
    let mut latch = RedirectLatch::default();
    let signed_out = AuthState::resolved(None);
    assert!(latch.observe(&signed_out));
    assert!(!latch.observe(&signed_in()));
    assert!(latch.observe(&signed_out));
}
