//! Networking modules for the identity backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the auth REST calls and `types` defines their wire schema.

pub mod api;
pub mod types;
