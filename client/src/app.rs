//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::{layout::DashboardLayout, route_guard::RouteGuard};
use crate::pages::{dashboard::DashboardPage, login::SignInPage, root::RootRedirect, settings::SettingsPage};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::storage::BrowserStorage;
use crate::util::theme::{self, DocumentRoot};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and ui contexts, injects the stored theme and restores
/// the session once in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    // Effects only run in the browser; the server keeps auth pending.
    Effect::new(move || {
        let theme = theme::initial(&BrowserStorage, &DocumentRoot);
        ui.update(|u| u.theme = theme);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = crate::net::api::restore_session().await;
            if user.is_none() {
                log::info!("no active session");
            }
            auth.update(|a| a.apply_restore(user));
        });
    });

    view! {
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route path=StaticSegment("login") view=SignInPage/>
                <ParentRoute path=StaticSegment("admin") view=AdminShell>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Guarded dashboard shell hosting the `/admin` child routes.
#[component]
fn AdminShell() -> impl IntoView {
    view! {
        <RouteGuard>
            <DashboardLayout>
                <Outlet/>
            </DashboardLayout>
        </RouteGuard>
    }
}
