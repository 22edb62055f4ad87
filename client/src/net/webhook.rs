//! Fire-and-forget webhook relay from UI flows.
//!
//! The relay future is spawned detached: the triggering action never waits
//! for it and never sees its failure. Failures are logged by the relay;
//! pass an outcome sink to observe them.

use futures::channel::mpsc::UnboundedSender;
use leptos::prelude::*;
use platform::{WebhookClientPayload, WebhookOutcome, WebhookRelay};

use super::api::platform_client;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;

/// Relay `payload` to the `dispatch-webhook` function in the background.
/// `timestamp` is filled with the call time when absent.
pub fn dispatch_webhook_from_client(
    config: &ClientConfig,
    access_token: Option<String>,
    payload: WebhookClientPayload,
    sink: Option<UnboundedSender<WebhookOutcome>>,
) {
    let relay = WebhookRelay::new(platform_client(config, access_token));
    let relay = match sink {
        Some(sink) => relay.with_sink(sink),
        None => relay,
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        relay.dispatch(payload).await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (relay, payload);
}

/// Context-bound dispatcher for components. The signed-in user's id is
/// attached when the payload carries none.
pub fn use_webhook_dispatch() -> Callback<WebhookClientPayload> {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    Callback::new(move |payload: WebhookClientPayload| {
        let state = auth.get_untracked();
        let payload = match payload.user_id {
            Some(_) => payload,
            None => payload.with_user(state.user_id()),
        };
        dispatch_webhook_from_client(&config, state.access_token(), payload, None);
    })
}
