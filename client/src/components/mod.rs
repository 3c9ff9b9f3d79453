//! Reusable UI components shared by console pages.
//!
//! ARCHITECTURE
//! ============
//! `route_guard` gates access, `layout` composes the shell from `header`
//! and `sidebar`, and `loading` is the shared pending indicator.

pub mod header;
pub mod layout;
pub mod loading;
pub mod route_guard;
pub mod sidebar;
