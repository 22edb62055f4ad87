//! Networking modules for the backend platform.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` adapts the browser HTTP stack to `platform::Transport` and builds
//! session-aware clients; `webhook` relays domain events without blocking UI
//! flows.

pub mod api;
pub mod webhook;
