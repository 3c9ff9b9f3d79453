//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the health check, the compiled WASM/CSS assets under `/pkg`, and
//! Leptos SSR rendering of every console route into one Axum router. The
//! identity backend is reached by the browser directly; nothing here proxies
//! `/api/auth/*`.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::LeptosOptions;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes that do not depend on Leptos options.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: base routes + `/pkg` assets + Leptos SSR.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(console_ui::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || console_ui::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
