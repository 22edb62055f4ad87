//! Shared wire model and client for the dashboard's backend platform.
//!
//! This crate owns everything the UI, the CLI, and the SSR host agree on
//! about the external backend: row types, the table-query shape for the
//! REST data API, the auth and edge-function endpoints, and the webhook
//! relay. It stays free of any HTTP stack; callers plug one in through
//! [`Transport`].
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` drives this crate from the browser through `gloo-net`, `cli`
//! drives it natively through `reqwest`. Tests drive it through the recording
//! mock in [`testing`].

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod types;
pub mod webhook;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use client::{Method, PlatformClient, PlatformRequest, PlatformResponse, Transport};
pub use config::PlatformConfig;
pub use error::PlatformError;
pub use query::{AUDIT_LOG_LIMIT, Direction, TableQuery};
pub use types::{AuditLog, AuthUser, EntityRoute, Session};
pub use webhook::{StampedWebhook, WebhookClientPayload, WebhookOutcome, WebhookRelay};
