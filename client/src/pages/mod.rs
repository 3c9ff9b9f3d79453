//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Guarded pages render inside `DashboardLayout`.

pub mod dashboard;
pub mod login;
pub mod root;
pub mod settings;
