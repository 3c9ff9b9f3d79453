//! Admin-only wrapper for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/admin` route renders beneath this component. It re-decides on each
//! auth change: a logout inside the console sends the visitor back to sign-in
//! without any page having to handle it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingIndicator;
use crate::state::auth::AuthState;
use crate::util::auth::{Gate, access, install_guard_redirect};

/// Render `children` only for an authenticated admin.
///
/// Loading shows an indicator; a denied visitor gets nothing rendered and a
/// replace-navigation to sign-in.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| access(&auth.get()));
    install_guard_redirect(decision, use_navigate());

    move || match decision.get().map(|()| children()) {
        Gate::Pending => view! { <LoadingIndicator/> }.into_any(),
        Gate::Denied(_) => ().into_any(),
        Gate::Allowed(content) => content,
    }
}
