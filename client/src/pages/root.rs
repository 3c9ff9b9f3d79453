//! Landing route that forwards to the dashboard or sign-in.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingIndicator;
use crate::state::auth::AuthState;
use crate::util::auth::install_entry_redirect;

/// Shows the loading indicator until the session resolves, then pushes the
/// visitor to the dashboard (admins) or sign-in (everyone else).
#[component]
pub fn RootRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_entry_redirect(auth, use_navigate());

    view! {
        <div class="root-redirect">
            <LoadingIndicator/>
        </div>
    }
}
