//! Best-effort relay of domain events to the `dispatch-webhook` function.
//!
//! DESIGN
//! ======
//! Delivery never fails from the caller's point of view: [`WebhookRelay::dispatch`]
//! resolves to a [`WebhookOutcome`] instead of a `Result`, logs failures at
//! `warn`, and forwards every outcome to an optional sink. UI code spawns the
//! future detached so a slow or failing relay never blocks the triggering
//! action; tests await it and read the sink.

#[cfg(test)]
#[path = "webhook_test.rs"]
mod webhook_test;

use futures::channel::mpsc::UnboundedSender;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::client::{PlatformClient, Transport};

/// Edge function that fans events out to tenant webhooks.
pub const DISPATCH_WEBHOOK_FUNCTION: &str = "dispatch-webhook";

/// Outbound event as built by the caller. `timestamp` is optional here and
/// filled in at dispatch time when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WebhookClientPayload {
    /// Event name, e.g. `"record.created"`.
    pub event: String,
    /// Entity type the event concerns.
    pub entity: String,
    /// Event body forwarded verbatim.
    pub data: serde_json::Value,
    pub tenant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl WebhookClientPayload {
    #[must_use]
    pub fn new(event: &str, entity: &str, data: serde_json::Value, tenant_id: &str) -> Self {
        Self {
            event: event.to_owned(),
            entity: entity.to_owned(),
            data,
            tenant_id: tenant_id.to_owned(),
            user_id: None,
            timestamp: None,
        }
    }

    #[must_use]
    pub fn with_user(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Fix the timestamp, keeping a caller-supplied one.
    #[must_use]
    pub fn stamp(self, now: &str) -> StampedWebhook {
        StampedWebhook {
            timestamp: self.timestamp.unwrap_or_else(|| now.to_owned()),
            event: self.event,
            entity: self.entity,
            data: self.data,
            tenant_id: self.tenant_id,
            user_id: self.user_id,
        }
    }
}

/// Body actually sent to the function; `timestamp` is always present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StampedWebhook {
    pub event: String,
    pub entity: String,
    pub data: serde_json::Value,
    pub tenant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub timestamp: String,
}

/// What happened to one dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WebhookOutcome {
    Delivered { event: String, timestamp: String },
    Failed { event: String, message: String },
}

impl WebhookOutcome {
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// Fire-and-forget dispatcher over a [`PlatformClient`].
#[derive(Clone, Debug)]
pub struct WebhookRelay<T> {
    client: PlatformClient<T>,
    sink: Option<UnboundedSender<WebhookOutcome>>,
}

impl<T: Transport> WebhookRelay<T> {
    pub fn new(client: PlatformClient<T>) -> Self {
        Self { client, sink: None }
    }

    /// Forward every outcome to `sink`. A closed sink is ignored.
    #[must_use]
    pub fn with_sink(mut self, sink: UnboundedSender<WebhookOutcome>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Dispatch stamped with the current UTC time when `timestamp` is absent.
    pub async fn dispatch(&self, payload: WebhookClientPayload) -> WebhookOutcome {
        self.dispatch_at(payload, &now_rfc3339()).await
    }

    /// Dispatch stamped with `now` when `timestamp` is absent.
    pub async fn dispatch_at(&self, payload: WebhookClientPayload, now: &str) -> WebhookOutcome {
        let stamped = payload.stamp(now);
        let event = stamped.event.clone();
        let outcome = match serde_json::to_value(&stamped) {
            Ok(body) => match self.client.invoke_function(DISPATCH_WEBHOOK_FUNCTION, body).await {
                Ok(_) => WebhookOutcome::Delivered { event, timestamp: stamped.timestamp },
                Err(e) => WebhookOutcome::Failed { event, message: e.to_string() },
            },
            Err(e) => WebhookOutcome::Failed { event, message: e.to_string() },
        };
        match &outcome {
            WebhookOutcome::Delivered { event, .. } => tracing::debug!(%event, "webhook dispatched"),
            WebhookOutcome::Failed { event, message } => {
                tracing::warn!(%event, error = %message, "webhook dispatch failed");
            }
        }
        if let Some(sink) = &self.sink {
            let _ = sink.unbounded_send(outcome.clone());
        }
        outcome
    }
}

/// Current UTC time as RFC 3339.
#[must_use]
pub fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339).unwrap_or_else(|_| now.unix_timestamp().to_string())
}
