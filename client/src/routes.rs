//! Route paths shared by the router, the guard, and navigation links.

/// Landing route; forwards to the dashboard or sign-in.
pub const ROOT: &str = "/";
/// Sign-in entry point.
pub const SIGN_IN: &str = "/login";
/// Admin dashboard root.
pub const DASHBOARD: &str = "/admin";
pub const SETTINGS: &str = "/admin/settings";
