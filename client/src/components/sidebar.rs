//! Collapsible navigation sidebar with a mobile overlay mode.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes;
use crate::state::shell::ShellState;

/// One sidebar navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", href: routes::DASHBOARD, icon: "▦" },
    NavItem { label: "Settings", href: routes::SETTINGS, icon: "⚙" },
];

/// Whether `href` should be highlighted for `current` path. The dashboard
/// root matches exactly so it does not light up on every nested route.
fn is_active(current: &str, href: &str) -> bool {
    let current = current.trim_end_matches('/');
    if href == routes::DASHBOARD {
        current == href
    } else {
        current == href || current.starts_with(&format!("{href}/"))
    }
}

fn sidebar_class(open: bool, collapsed: bool) -> String {
    let mut class = String::from("sidebar");
    if open {
        class.push_str(" sidebar--open");
    }
    if collapsed {
        class.push_str(" sidebar--collapsed");
    }
    class
}

fn nav_link_class(active: bool) -> &'static str {
    if active { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
}

#[component]
pub fn Sidebar(shell: RwSignal<ShellState>) -> impl IntoView {
    let pathname = use_location().pathname;

    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let NavItem { label, href, icon } = *item;
            view! {
                <a
                    href=href
                    class=move || nav_link_class(is_active(&pathname.get(), href))
                    title=label
                    on:click=move |_| shell.update(ShellState::close_sidebar)
                >
                    <span class="sidebar__icon" aria-hidden="true">{icon}</span>
                    <Show when=move || !shell.get().sidebar_collapsed>
                        <span class="sidebar__label">{label}</span>
                    </Show>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Show when=move || shell.get().sidebar_open>
            <div class="sidebar-overlay" on:click=move |_| shell.update(ShellState::close_sidebar)></div>
        </Show>
        <aside class=move || {
            let s = shell.get();
            sidebar_class(s.sidebar_open, s.sidebar_collapsed)
        }>
            <div class="sidebar__brand">
                <span class="sidebar__logo" aria-hidden="true">"◆"</span>
                <Show when=move || !shell.get().sidebar_collapsed>
                    <span class="sidebar__brand-name">"Console"</span>
                </Show>
            </div>
            <nav class="sidebar__nav">{links}</nav>
            <button
                class="btn sidebar__collapse"
                title="Collapse sidebar"
                on:click=move |_| shell.update(ShellState::toggle_collapsed)
            >
                {move || if shell.get().sidebar_collapsed { "»" } else { "«" }}
            </button>
        </aside>
    }
}
