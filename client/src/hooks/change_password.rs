//! `use_change_own_password`: self-service password update with toasts.

#[cfg(test)]
#[path = "change_password_test.rs"]
mod change_password_test;

use leptos::prelude::*;
use platform::{PlatformClient, Transport, WebhookClientPayload};

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::notifications::{Notice, NotificationKind, NotificationState, notify};

pub const PASSWORD_CHANGED_TITLE: &str = "Password updated";
pub const PASSWORD_FAILED_TITLE: &str = "Could not update password";

#[derive(Clone, Copy)]
pub struct ChangePasswordHandle {
    /// Submit a new password. Ignored while a change is in flight.
    pub change_password: Callback<String>,
    pub is_changing: Signal<bool>,
}

/// Run one password change and describe the result as a toast.
pub async fn run_password_change<T: Transport>(client: &PlatformClient<T>, new_password: &str) -> Notice {
    match client.change_own_password(new_password).await {
        Ok(()) => Notice::success(PASSWORD_CHANGED_TITLE),
        Err(e) => Notice::error(PASSWORD_FAILED_TITLE, &e.to_string()),
    }
}

/// Claim the busy flag. Returns `false` when a change is already in flight.
pub fn begin_password_change(busy: RwSignal<bool>) -> bool {
    if busy.get_untracked() {
        return false;
    }
    busy.set(true);
    true
}

/// Run a claimed change to completion: one toast, then release the busy
/// flag. Returns whether the change succeeded.
pub async fn complete_password_change<T: Transport>(
    client: &PlatformClient<T>,
    new_password: &str,
    busy: RwSignal<bool>,
    notifications: RwSignal<NotificationState>,
) -> bool {
    let notice = run_password_change(client, new_password).await;
    let succeeded = notice.kind == NotificationKind::Success;
    notify(notifications, notice);
    busy.try_set(false);
    succeeded
}

/// Event relayed to tenant webhooks after a successful change.
#[must_use]
pub fn password_changed_event(auth: &AuthState) -> Option<WebhookClientPayload> {
    let tenant_id = auth.tenant_id()?;
    let payload = WebhookClientPayload::new("user.password_changed", "user", serde_json::json!({}), &tenant_id);
    Some(payload.with_user(auth.user_id()))
}

pub fn use_change_own_password() -> ChangePasswordHandle {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let dispatch_webhook = crate::net::webhook::use_webhook_dispatch();
    let busy = RwSignal::new(false);

    let change_password = Callback::new(move |new_password: String| {
        if !begin_password_change(busy) {
            return;
        }
        let state = auth.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let client = crate::net::api::platform_client(&config, state.access_token());
                let succeeded = complete_password_change(&client, &new_password, busy, notifications).await;
                if succeeded {
                    if let Some(payload) = password_changed_event(&state) {
                        dispatch_webhook.run(payload);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, state, new_password, dispatch_webhook);
            notify(notifications, Notice::error(PASSWORD_FAILED_TITLE, "not available on this target"));
            busy.set(false);
        }
    });

    ChangePasswordHandle { change_password, is_changing: busy.into() }
}
