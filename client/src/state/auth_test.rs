use super::*;
use crate::net::types::Role;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        phone: None,
        role,
    }
}

// =============================================================
// Constructors
// =============================================================

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

#[test]
fn signed_in_sets_user_and_flags() {
    let state = AuthState::signed_in(user(Role::Admin));
    assert!(!state.loading);
    assert!(state.authenticated);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn resolved_none_is_signed_out() {
    assert_eq!(AuthState::resolved(None), AuthState::signed_out());
}

#[test]
fn resolved_some_is_signed_in() {
    let u = user(Role::Customer);
    assert_eq!(AuthState::resolved(Some(u.clone())), AuthState::signed_in(u));
}

// =============================================================
// apply_restore
// =============================================================

#[test]
fn apply_restore_resolves_pending_state() {
    let mut state = AuthState::pending();
    state.apply_restore(Some(user(Role::Admin)));
    assert_eq!(state, AuthState::signed_in(user(Role::Admin)));

    let mut state = AuthState::pending();
    state.apply_restore(None);
    assert_eq!(state, AuthState::signed_out());
}

#[test]
fn late_restore_does_not_overwrite_completed_sign_in() {
    // Sign-in finished while the restore was still waiting on refresh.
    let mut state = AuthState::signed_in(user(Role::Admin));
    state.apply_restore(None);
    assert_eq!(state, AuthState::signed_in(user(Role::Admin)));
    assert!(state.is_admin());
}

#[test]
fn late_restore_does_not_revive_a_logged_out_session() {
    let mut state = AuthState::signed_out();
    state.apply_restore(Some(user(Role::Admin)));
    assert_eq!(state, AuthState::signed_out());
}

// =============================================================
// is_admin
// =============================================================

#[test]
fn is_admin_requires_admin_role() {
    assert!(AuthState::signed_in(user(Role::Admin)).is_admin());
    assert!(!AuthState::signed_in(user(Role::Customer)).is_admin());
}

#[test]
fn is_admin_false_while_loading_even_with_admin_user() {
    let state = AuthState { user: Some(user(Role::Admin)), loading: true, authenticated: true };
    assert!(!state.is_admin());
}

#[test]
fn is_admin_false_when_not_authenticated() {
    let state = AuthState { user: Some(user(Role::Admin)), loading: false, authenticated: false };
    assert!(!state.is_admin());
}

#[test]
fn is_admin_false_when_authenticated_without_user() {
    let state = AuthState { user: None, loading: false, authenticated: true };
    assert!(!state.is_admin());
}
