//! `reqwest` implementation of the platform `Transport`.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use platform::{Method, PlatformConfig, PlatformError, PlatformRequest, PlatformResponse, Transport};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    config: PlatformConfig,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns [`PlatformError::Transport`] if the HTTP client cannot be
    /// built (TLS backend initialization).
    pub fn new(config: PlatformConfig) -> Result<Self, PlatformError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PlatformError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }
}

pub(crate) fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
    }
}

/// `Authorization` value: the session token when present, else the anon key.
pub(crate) fn bearer_value(config: &PlatformConfig, request: &PlatformRequest) -> String {
    format!("Bearer {}", request.bearer.as_deref().unwrap_or(&config.anon_key))
}

impl ReqwestTransport {
    /// Headers, encoded query, and JSON body for `request`.
    pub(crate) fn build(&self, request: &PlatformRequest) -> reqwest::RequestBuilder {
        let url = platform::client::request_url(&self.config, request);
        let mut builder = self
            .http
            .request(reqwest_method(request.method), &url)
            .header("apikey", &self.config.anon_key)
            .header(reqwest::header::AUTHORIZATION, bearer_value(&self.config, request))
            .query(&request.query);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: PlatformRequest) -> Result<PlatformResponse, PlatformError> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "platform request");

        let response = self
            .build(&request)
            .send()
            .await
            .map_err(|e| PlatformError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| PlatformError::Transport(e.to_string()))?;
        Ok(PlatformResponse { status, body })
    }
}
