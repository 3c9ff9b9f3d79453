//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ui`, `shell`) so components depend on
//! small focused models. `auth` and `ui` are app-wide contexts; `shell` is
//! owned by the dashboard layout.

pub mod auth;
pub mod shell;
pub mod ui;
