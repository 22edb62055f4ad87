//! Error type shared by every platform operation.

/// Error returned by [`crate::PlatformClient`] operations and config loading.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// A required configuration variable is absent.
    #[error("missing configuration: {var}")]
    MissingConfig { var: String },
    /// The operation needs a signed-in session and none is attached.
    #[error("not authenticated")]
    NotAuthenticated,
    /// The request never produced an HTTP response.
    #[error("transport failed: {0}")]
    Transport(String),
    /// The platform answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The active HTTP stack cannot run here (e.g. server-side render).
    #[error("not available on this target")]
    Unavailable,
}

impl PlatformError {
    /// HTTP status for [`PlatformError::Status`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
