use super::*;
use crate::net::types::{Role, User};

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        phone: None,
        role,
    }
}

/// Every combination of the three inputs, with the user slot covering
/// absent / customer / admin.
fn all_states() -> Vec<AuthState> {
    let mut states = Vec::new();
    for loading in [true, false] {
        for authenticated in [true, false] {
            for u in [None, Some(user(Role::Customer)), Some(user(Role::Admin))] {
                states.push(AuthState { user: u, loading, authenticated });
            }
        }
    }
    states
}

// =============================================================
// gate
// =============================================================

#[test]
fn loading_is_pending_and_builds_no_content() {
    for state in all_states().into_iter().filter(|s| s.loading) {
        let mut built = false;
        let result = gate(&state, || built = true);
        assert_eq!(result, Gate::Pending, "{state:?}");
        assert!(!built);
        assert_eq!(result.redirect(), None);
    }
}

#[test]
fn unauthenticated_is_denied_with_replace_to_sign_in() {
    for state in all_states().into_iter().filter(|s| !s.loading && !s.authenticated) {
        let mut built = false;
        let result = gate(&state, || built = true);
        assert_eq!(result, Gate::Denied(Redirect::replace(routes::SIGN_IN)), "{state:?}");
        assert!(!built);
    }
}

#[test]
fn authenticated_customer_is_denied() {
    let state = AuthState::signed_in(user(Role::Customer));
    let result = gate(&state, || "protected");
    assert_eq!(result, Gate::Denied(Redirect::replace(routes::SIGN_IN)));
}

#[test]
fn authenticated_without_user_is_denied() {
    let state = AuthState { user: None, loading: false, authenticated: true };
    assert_eq!(access(&state), Gate::Denied(Redirect::replace(routes::SIGN_IN)));
}

#[test]
fn admin_receives_content_unmodified() {
    let state = AuthState::signed_in(user(Role::Admin));
    let content = vec!["card-a", "card-b"];
    assert_eq!(gate(&state, || content.clone()), Gate::Allowed(content));
}

#[test]
fn map_only_builds_content_for_allowed() {
    let denied: Access = Gate::Denied(Redirect::replace(routes::SIGN_IN));
    let mut built = 0;
    assert_eq!(denied.map(|()| built += 1), Gate::Denied(Redirect::replace(routes::SIGN_IN)));
    assert_eq!(Access::Pending.map(|()| built += 1), Gate::Pending);
    assert_eq!(built, 0);
    assert_eq!(Access::Allowed(()).map(|()| "content"), Gate::Allowed("content"));
}

#[test]
fn denied_redirect_uses_replace_options() {
    let opts = Redirect::replace(routes::SIGN_IN).options();
    assert!(opts.replace);
    assert!(!Redirect::push(routes::SIGN_IN).options().replace);
}

// =============================================================
// entry_destination
// =============================================================

#[test]
fn entry_waits_while_loading() {
    for state in all_states().into_iter().filter(|s| s.loading) {
        assert_eq!(entry_destination(&state), None, "{state:?}");
    }
}

#[test]
fn entry_sends_admin_to_dashboard_with_push() {
    let state = AuthState::signed_in(user(Role::Admin));
    assert_eq!(entry_destination(&state), Some(Redirect::push(routes::DASHBOARD)));
}

#[test]
fn entry_sends_everyone_else_to_sign_in() {
    for state in all_states().into_iter().filter(|s| !s.loading && !s.is_admin()) {
        assert_eq!(entry_destination(&state), Some(Redirect::push(routes::SIGN_IN)), "{state:?}");
    }
}

// =============================================================
// RedirectLatch
// =============================================================

#[test]
fn latch_navigates_once_for_repeated_decision() {
    let mut latch = RedirectLatch::default();
    let to_sign_in = Some(Redirect::replace(routes::SIGN_IN));
    assert_eq!(latch.observe(to_sign_in), to_sign_in);
    assert_eq!(latch.observe(to_sign_in), None);
    assert_eq!(latch.observe(to_sign_in), None);
}

#[test]
fn latch_rearms_after_decision_clears() {
    let mut latch = RedirectLatch::default();
    let to_sign_in = Some(Redirect::replace(routes::SIGN_IN));
    latch.observe(to_sign_in);
    assert_eq!(latch.observe(None), None);
    assert_eq!(latch.observe(to_sign_in), to_sign_in);
}

#[test]
fn latch_follows_a_changed_target() {
    let mut latch = RedirectLatch::default();
    latch.observe(Some(Redirect::push(routes::SIGN_IN)));
    let dashboard = Some(Redirect::push(routes::DASHBOARD));
    assert_eq!(latch.observe(dashboard), dashboard);
}

#[test]
fn latch_ignores_pending() {
    let mut latch = RedirectLatch::default();
    assert_eq!(latch.observe(None), None);
}
