//! Access decisions for guarded routes and the landing redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RouteGuard` and `RootRedirect` must apply identical rules: no decision
//! while the session is loading, and anything short of an authenticated admin
//! goes to sign-in. The decisions are pure functions over `AuthState`; the
//! `install_*` helpers wire them to the router as effects.
//!
//! DESIGN
//! ======
//! The guard's outcome is the tri-state [`Gate`]. Denied carries the redirect
//! and never the content, so protected views are not constructed for a
//! visitor who is about to be sent away.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes;
use crate::state::auth::AuthState;

/// How a redirect alters history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMode {
    /// Add a history entry.
    Push,
    /// Replace the current entry.
    Replace,
}

/// A navigation command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    pub mode: NavMode,
}

impl Redirect {
    #[must_use]
    pub fn push(to: &'static str) -> Self {
        Self { to, mode: NavMode::Push }
    }

    #[must_use]
    pub fn replace(to: &'static str) -> Self {
        Self { to, mode: NavMode::Replace }
    }

    #[must_use]
    pub fn options(self) -> NavigateOptions {
        NavigateOptions { replace: self.mode == NavMode::Replace, ..NavigateOptions::default() }
    }
}

/// Outcome of the guard's evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gate<T> {
    /// Session still loading; show a neutral indicator.
    Pending,
    /// Access refused; render nothing and follow the redirect.
    Denied(Redirect),
    /// Access granted with the guarded content.
    Allowed(T),
}

impl<T> Gate<T> {
    /// Replace the allowed content, leaving `Pending`/`Denied` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Gate<U> {
        match self {
            Self::Pending => Gate::Pending,
            Self::Denied(r) => Gate::Denied(r),
            Self::Allowed(content) => Gate::Allowed(f(content)),
        }
    }

    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            Self::Denied(r) => Some(*r),
            Self::Pending | Self::Allowed(_) => None,
        }
    }
}

/// Content-free access decision, cheap to compare between auth changes.
pub type Access = Gate<()>;

/// Evaluate the guard, building `content` only when access is granted.
pub fn gate<T>(state: &AuthState, content: impl FnOnce() -> T) -> Gate<T> {
    if state.loading {
        return Gate::Pending;
    }
    // Signed-out and non-admin identities take the same exit.
    if !state.authenticated || !state.is_admin() {
        return Gate::Denied(Redirect::replace(routes::SIGN_IN));
    }
    Gate::Allowed(content())
}

pub fn access(state: &AuthState) -> Access {
    gate(state, || ())
}

/// Where the landing route sends a visitor, or `None` while loading.
pub fn entry_destination(state: &AuthState) -> Option<Redirect> {
    if state.loading {
        return None;
    }
    if state.is_admin() {
        Some(Redirect::push(routes::DASHBOARD))
    } else {
        Some(Redirect::push(routes::SIGN_IN))
    }
}

/// Suppresses repeat navigation while a decision is unchanged.
///
/// Re-arms as soon as the decision stops pointing at the last target, so a
/// later return to the same target navigates again.
#[derive(Clone, Debug, Default)]
pub struct RedirectLatch {
    last: Option<&'static str>,
}

impl RedirectLatch {
    /// Feed the latest decision; returns the redirect to perform, if any.
    pub fn observe(&mut self, decision: Option<Redirect>) -> Option<Redirect> {
        match decision {
            None => {
                self.last = None;
                None
            }
            Some(r) if self.last == Some(r.to) => None,
            Some(r) => {
                self.last = Some(r.to);
                Some(r)
            }
        }
    }
}

fn install_redirect<D, F>(decide: D, navigate: F)
where
    D: Fn() -> Option<Redirect> + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let latch = Rc::new(RefCell::new(RedirectLatch::default()));
    Effect::new(move || {
        let next = latch.borrow_mut().observe(decide());
        if let Some(redirect) = next {
            #[cfg(feature = "hydrate")]
            log::debug!("auth redirect to {}", redirect.to);
            navigate(redirect.to, redirect.options());
        }
    });
}

/// Replace-redirect to sign-in whenever the guard denies access.
pub fn install_guard_redirect<F>(decision: Memo<Access>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(move || decision.get().redirect(), navigate);
}

/// Push-redirect from the landing route once the session has resolved.
pub fn install_entry_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(move || entry_destination(&auth.get()), navigate);
}
