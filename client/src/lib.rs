//! # console-ui
//!
//! Leptos + WASM front-end for the admin console.
//!
//! This crate contains the route guard and landing redirect, the dashboard
//! shell, pages, application state, and the REST helpers that talk to the
//! external identity backend. The `hydrate` feature builds the browser bundle;
//! the `ssr` feature is consumed by the `admin-console` server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
