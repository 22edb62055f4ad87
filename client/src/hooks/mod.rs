//! Data hooks wrapping platform reads and mutations in reactive state.
//!
//! ARCHITECTURE
//! ============
//! A hook reads config and auth from context, owns a small state model from
//! `state`, and exposes read-only signals plus trigger callbacks. Network
//! work is spawned locally in the browser; results land through
//! `try_update` so a reply after unmount is dropped silently.

pub mod audit_log;
pub mod change_password;
pub mod entity_routes;
