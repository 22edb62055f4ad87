//! Request shaping for the platform's data, auth, and function APIs.
//!
//! ARCHITECTURE
//! ============
//! [`PlatformClient`] turns each dashboard operation into a
//! [`PlatformRequest`] and decodes the [`PlatformResponse`]. The HTTP stack
//! sits behind [`Transport`] so the same request logic runs in the browser,
//! in the CLI, and against the recording mock in tests.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`PlatformError::Status`] carrying the
//! platform's own message, so callers can show it verbatim.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::PlatformConfig;
use crate::error::PlatformError;
use crate::query::{AUDIT_LOG_LIMIT, TableQuery, audit_log_query, entity_routes_query};
use crate::types::{AuditLog, AuthUser, EntityRoute, Session, sort_entity_routes};

/// HTTP method of a [`PlatformRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// A fully shaped request, relative to the platform base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct PlatformRequest {
    pub method: Method,
    /// Absolute path below the base URL, e.g. `/rest/v1/audit_logs`.
    pub path: String,
    /// Raw query pairs; the transport's HTTP client encodes them.
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Session access token; transports fall back to the anon key when absent.
    pub bearer: Option<String>,
}

impl PlatformRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None, bearer: None }
    }
}

/// Raw response handed back by a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformResponse {
    pub status: u16,
    pub body: String,
}

impl PlatformResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP seam for [`PlatformClient`].
///
/// Implementations attach the `apikey` header and the bearer token
/// (`request.bearer`, or the anon key when absent) and report any failure to
/// obtain a response as [`PlatformError::Transport`].
pub trait Transport {
    fn send(&self, request: PlatformRequest) -> impl Future<Output = Result<PlatformResponse, PlatformError>>;
}

/// Dashboard operations against the backend platform.
#[derive(Clone, Debug)]
pub struct PlatformClient<T> {
    transport: T,
    access_token: Option<String>,
}

impl<T: Transport> PlatformClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, access_token: None }
    }

    /// Attach a session access token to every subsequent request.
    #[must_use]
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Up to [`AUDIT_LOG_LIMIT`] most-recent audit records, newest first,
    /// filtered to `tenant` when given.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error unchanged.
    pub async fn fetch_audit_logs(&self, tenant: Option<&str>) -> Result<Vec<AuditLog>, PlatformError> {
        let mut logs: Vec<AuditLog> = self.select(&audit_log_query(tenant)).await?;
        logs.truncate(AUDIT_LOG_LIMIT);
        Ok(logs)
    }

    /// Active menu routes for `tenant`, sorted by `order_index`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error unchanged.
    pub async fn fetch_entity_routes(&self, tenant: Option<&str>) -> Result<Vec<EntityRoute>, PlatformError> {
        let routes: Vec<EntityRoute> = self.select(&entity_routes_query(tenant)).await?;
        Ok(sort_entity_routes(routes))
    }

    /// Run an arbitrary table read and decode the rows.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error unchanged.
    pub async fn select<R: DeserializeOwned>(&self, query: &TableQuery) -> Result<Vec<R>, PlatformError> {
        let mut request = PlatformRequest::new(Method::Get, query.path());
        request.query = query.to_query_pairs();
        request.bearer = self.access_token.clone();
        let body = self.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Exchange email + password for a session.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Status`] with the platform message on bad
    /// credentials.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, PlatformError> {
        let mut request = PlatformRequest::new(Method::Post, "/auth/v1/token");
        request.query = vec![("grant_type".to_owned(), "password".to_owned())];
        request.body = Some(serde_json::json!({ "email": email, "password": password }));
        let body = self.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// The user behind the attached session.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NotAuthenticated`] without a session.
    pub async fn fetch_current_user(&self) -> Result<AuthUser, PlatformError> {
        let request = self.authed(PlatformRequest::new(Method::Get, "/auth/v1/user"))?;
        let body = self.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Revoke the attached session.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NotAuthenticated`] without a session.
    pub async fn sign_out(&self) -> Result<(), PlatformError> {
        let request = self.authed(PlatformRequest::new(Method::Post, "/auth/v1/logout"))?;
        self.execute(request).await.map(|_| ())
    }

    /// Self-service password update for the signed-in user. No strength
    /// check happens client-side; the platform decides.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NotAuthenticated`] without a session, or the
    /// platform's rejection as [`PlatformError::Status`].
    pub async fn change_own_password(&self, new_password: &str) -> Result<(), PlatformError> {
        let mut request = self.authed(PlatformRequest::new(Method::Put, "/auth/v1/user"))?;
        request.body = Some(serde_json::json!({ "password": new_password }));
        self.execute(request).await.map(|_| ())
    }

    /// Invoke a named edge function with a JSON body. Returns the decoded
    /// response body, or `Value::Null` when it is empty.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error unchanged.
    pub async fn invoke_function(&self, name: &str, body: Value) -> Result<Value, PlatformError> {
        let mut request = PlatformRequest::new(Method::Post, function_path(name));
        request.body = Some(body);
        request.bearer = self.access_token.clone();
        let text = self.execute(request).await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn authed(&self, mut request: PlatformRequest) -> Result<PlatformRequest, PlatformError> {
        let token = self.access_token.clone().ok_or(PlatformError::NotAuthenticated)?;
        request.bearer = Some(token);
        Ok(request)
    }

    async fn execute(&self, request: PlatformRequest) -> Result<String, PlatformError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        tracing::debug!(method, %path, "platform request");
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let message = error_message(response.status, &response.body);
            tracing::debug!(method, %path, status = response.status, %message, "platform request rejected");
            return Err(PlatformError::Status { status: response.status, message });
        }
        Ok(response.body)
    }
}

/// Absolute URL for `request.path` against the configured base URL.
/// `request.query` is left to the transport's HTTP client to encode.
#[must_use]
pub fn request_url(config: &PlatformConfig, request: &PlatformRequest) -> String {
    format!("{}{}", config.url, request.path)
}

#[must_use]
pub fn function_path(name: &str) -> String {
    format!("/functions/v1/{name}")
}

/// Human-readable message from a platform error body.
///
/// The data, auth, and function APIs each use a different key; the first
/// non-empty one wins, falling back to `HTTP <status>`.
#[must_use]
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            ["msg", "message", "error_description", "error"].iter().find_map(|key| {
                json.get(*key)
                    .and_then(Value::as_str)
                    .filter(|text| !text.trim().is_empty())
                    .map(str::to_owned)
            })
        })
        .unwrap_or_else(|| format!("HTTP {status}"))
}
