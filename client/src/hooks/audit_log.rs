//! `use_audit_log`: the tenant's most recent audit records.

use leptos::prelude::*;
use platform::AuditLog;

use crate::config::ClientConfig;
use crate::state::audit::AuditLogState;
use crate::state::auth::AuthState;

/// Reactive view of an audit-log query.
#[derive(Clone, Copy)]
pub struct AuditLogHandle {
    /// Newest first, at most 100; empty while loading or on error.
    pub logs: Signal<Vec<AuditLog>>,
    pub is_loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    /// Re-run the query with the current inputs.
    pub refetch: Callback<()>,
}

/// Fetch up to 100 audit records, newest first, filtered to `tenant` when it
/// yields a value. Re-runs whenever `tenant` or the session changes.
pub fn use_audit_log(tenant: Signal<Option<String>>) -> AuditLogHandle {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let state = RwSignal::new(AuditLogState::default());
    let refresh = RwSignal::new(0_u64);

    Effect::new(move || {
        refresh.track();
        let tenant_id = tenant.get();
        let token = auth.with(AuthState::access_token);
        let Some(seq) = state.try_update(AuditLogState::begin) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let client = crate::net::api::platform_client(&config, token);
            leptos::task::spawn_local(async move {
                let result = client
                    .fetch_audit_logs(tenant_id.as_deref())
                    .await
                    .map_err(|e| e.to_string());
                if let Err(message) = &result {
                    leptos::logging::warn!("audit log query failed: {message}");
                }
                state.try_update(|s| s.finish(seq, result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, tenant_id, token, seq);
        }
    });

    AuditLogHandle {
        logs: Signal::derive(move || state.with(|s| s.logs.clone())),
        is_loading: Signal::derive(move || state.with(|s| s.loading)),
        error: Signal::derive(move || state.with(|s| s.error.clone())),
        refetch: Callback::new(move |()| refresh.update(|n| *n += 1)),
    }
}
