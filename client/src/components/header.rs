//! Top bar with navigation toggle, notifications, theme switch and identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `DashboardLayout`. Reads the auth and ui contexts and flips
//! the layout's `ShellState`; logout only resolves auth to signed-out and
//! leaves the redirect to the route guard.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::shell::ShellState;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;
use crate::util::theme::{self, DocumentRoot};

const BADGE_CAP: u32 = 99;

/// Badge text for the notification bell; `None` hides the badge.
fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{BADGE_CAP}+")),
        n => Some(n.to_string()),
    }
}

/// Up to two uppercase initials from a display name.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn theme_toggle_icon(dark: bool) -> &'static str {
    if dark { "☀" } else { "☾" }
}

#[component]
pub fn DashboardHeader(shell: RwSignal<ShellState>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let identity = move || {
        auth.get()
            .user
            .map(|user| (user.name, user.email))
            .unwrap_or_default()
    };

    let on_theme = move |_| {
        let next = theme::toggle(ui.get_untracked().theme, &BrowserStorage, &DocumentRoot);
        ui.update(|u| u.theme = next);
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                log::info!("signed out");
                auth.set(AuthState::signed_out());
            });
        }
    };

    view! {
        <header class="console-header">
            <button
                class="btn console-header__menu"
                title="Toggle navigation"
                on:click=move |_| shell.update(ShellState::toggle_sidebar)
            >
                "☰"
            </button>
            <span class="console-header__title">"Admin Console"</span>

            <span class="console-header__spacer"></span>

            <button class="btn console-header__notifications" title="Notifications">
                "🔔"
                {move || {
                    badge_label(shell.get().notification_count)
                        .map(|label| view! { <span class="console-header__badge">{label}</span> })
                }}
            </button>

            <button class="btn console-header__theme" on:click=on_theme title="Toggle dark mode">
                {move || theme_toggle_icon(ui.get().dark_mode())}
            </button>

            <div class="console-header__user">
                <span class="console-header__avatar" aria-hidden="true">
                    {move || initials(&identity().0)}
                </span>
                <span class="console-header__identity">
                    <span class="console-header__name">{move || identity().0}</span>
                    <span class="console-header__email">{move || identity().1}</span>
                </span>
            </div>

            <button class="btn console-header__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
