//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (auth gating, hook wiring,
//! navigation) and delegates rendering details to `components`.

pub mod audit_log;
pub mod change_password;
pub mod dashboard;
pub mod entity;
pub mod home;
pub mod login;
