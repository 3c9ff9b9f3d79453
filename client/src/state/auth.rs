//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by `App`. The route guard and
//! the root redirector only read it; session restore, sign-in and logout are
//! the only writers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub authenticated: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::pending()
    }
}

impl AuthState {
    /// Session not yet resolved. No access decision may be made.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true, authenticated: false }
    }

    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false, authenticated: true }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, loading: false, authenticated: false }
    }

    /// Resolve from an optional session lookup result.
    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        user.map_or_else(Self::signed_out, Self::signed_in)
    }

    /// Apply the outcome of the mount-time session restore. A state that
    /// already resolved (sign-in or logout finished first) is left alone.
    pub fn apply_restore(&mut self, user: Option<User>) {
        if self.loading {
            *self = Self::resolved(user);
        }
    }

    /// True only for a resolved, authenticated identity with the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        !self.loading && self.authenticated && self.user.as_ref().is_some_and(User::is_admin)
    }
}
