//! Dashboard shell: sidebar, header and the routed content area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only beneath `RouteGuard`. Owns the `ShellState` for its lifetime
//! and the body scroll lock that accompanies the mobile overlay.

use leptos::prelude::*;

use crate::components::header::DashboardHeader;
use crate::components::sidebar::Sidebar;
use crate::state::shell::ShellState;
use crate::util::scroll_lock;

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let shell = RwSignal::new(ShellState::default());

    Effect::new(move || scroll_lock::set_locked(shell.get().sidebar_open));
    on_cleanup(scroll_lock::release);

    view! {
        <div class=move || {
            if shell.get().sidebar_collapsed { "console-layout console-layout--collapsed" } else { "console-layout" }
        }>
            <Sidebar shell=shell/>
            <div class="console-main">
                <DashboardHeader shell=shell/>
                <main class="console-content">{children()}</main>
            </div>
        </div>
    }
}
