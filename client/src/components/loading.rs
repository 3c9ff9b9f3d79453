//! Neutral loading indicator shown while the session resolves.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator" role="status" aria-live="polite">
            <span class="loading-indicator__spinner" aria-hidden="true"></span>
            <span class="loading-indicator__label">"Loading..."</span>
        </div>
    }
}
