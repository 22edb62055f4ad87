//! Recording [`Transport`] for tests.
//!
//! Responses are queued up front and handed out in order; every request is
//! kept so assertions can inspect exactly what would have gone on the wire.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crate::client::{PlatformRequest, PlatformResponse, Transport};
use crate::error::PlatformError;

#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<Result<PlatformResponse, String>>,
    requests: Vec<PlatformRequest>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and a JSON body.
    #[must_use]
    pub fn respond(self, status: u16, body: &serde_json::Value) -> Self {
        self.push(Ok(PlatformResponse { status, body: body.to_string() }));
        self
    }

    /// Queue a response with `status` and a raw body.
    #[must_use]
    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.push(Ok(PlatformResponse { status, body: body.to_owned() }));
        self
    }

    /// Queue a transport failure.
    #[must_use]
    pub fn fail(self, message: &str) -> Self {
        self.push(Err(message.to_owned()));
        self
    }

    /// Requests seen so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<PlatformRequest> {
        self.lock().requests.clone()
    }

    fn push(&self, response: Result<PlatformResponse, String>) {
        self.lock().responses.push_back(response);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: PlatformRequest) -> Result<PlatformResponse, PlatformError> {
        let mut state = self.lock();
        state.requests.push(request);
        match state.responses.pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(PlatformError::Transport(message)),
            None => Err(PlatformError::Transport("no response queued".to_owned())),
        }
    }
}
