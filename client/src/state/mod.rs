//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `audit`, `entity`, etc.) so individual
//! components can depend on small focused models. Each model is a plain
//! struct wrapped in an `RwSignal` and provided via context at the app root,
//! except `entity`, which is scoped to the subtree of an entity page.

pub mod audit;
pub mod auth;
pub mod entity;
pub mod notifications;
pub mod ui;
