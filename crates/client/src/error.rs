//! Adapter-level error signal.

use thiserror::Error;

/// Errors that can occur when talking to either external service.
///
/// Everything here is a transport-layer failure: not user-correctable,
/// surfaced as a transient notification, never as a field error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not complete (connect failure, timeout, TLS, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered outside the 2xx range.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
