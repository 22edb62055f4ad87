//! Browser transport and client construction for the backend platform.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every request fails with `PlatformError::Unavailable`
//! since the platform is only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as `PlatformError` values; callers decide whether to
//! notify, degrade, or ignore. Nothing here panics during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use platform::{PlatformClient, PlatformConfig, PlatformError, PlatformRequest, PlatformResponse, Session, Transport};

use crate::config::ClientConfig;

/// `gloo-net` implementation of [`Transport`].
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    config: PlatformConfig,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(config: PlatformConfig) -> Self {
        Self { config }
    }
}

/// Bearer value for `request`: the session token, else the anon key.
#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(config: &PlatformConfig, request: &PlatformRequest) -> String {
    format!("Bearer {}", request.bearer.as_deref().unwrap_or(&config.anon_key))
}

impl Transport for BrowserTransport {
    async fn send(&self, request: PlatformRequest) -> Result<PlatformResponse, PlatformError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use platform::Method;

            let url = platform::client::request_url(&self.config, &request);
            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
            }
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &bearer_header(&self.config, &request))
            .query(request.query.iter().map(|(key, value)| (key.as_str(), value.as_str())));

            let sent = match &request.body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| PlatformError::Transport(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| PlatformError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| PlatformError::Transport(e.to_string()))?;
            Ok(PlatformResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, request);
            Err(PlatformError::Unavailable)
        }
    }
}

pub type DashboardClient = PlatformClient<BrowserTransport>;

/// Client for `config`, carrying `access_token` when signed in.
#[must_use]
pub fn platform_client(config: &ClientConfig, access_token: Option<String>) -> DashboardClient {
    PlatformClient::new(BrowserTransport::new(config.platform.clone())).with_access_token(access_token)
}

/// Sign in with email + password.
///
/// # Errors
///
/// Returns the platform's rejection message (e.g. invalid credentials).
pub async fn sign_in(config: &ClientConfig, email: &str, password: &str) -> Result<Session, String> {
    platform_client(config, None)
        .sign_in_with_password(email, password)
        .await
        .map_err(|e| e.to_string())
}

/// Check a stored session against the platform. Returns the session with a
/// refreshed user on success, `None` when it is no longer valid.
pub async fn validate_session(config: &ClientConfig, mut session: Session) -> Option<Session> {
    let client = platform_client(config, Some(session.access_token.clone()));
    match client.fetch_current_user().await {
        Ok(user) => {
            session.user = user;
            Some(session)
        }
        Err(e) => {
            leptos::logging::warn!("stored session rejected: {e}");
            None
        }
    }
}

/// Revoke the session on the platform. Local state is cleared regardless.
pub async fn sign_out(config: &ClientConfig, access_token: Option<String>) {
    if let Err(e) = platform_client(config, access_token).sign_out().await {
        leptos::logging::warn!("sign out failed: {e}");
    }
}
