//! Error types for the dashboard API client.
//!
//! # Design
//! The three transport outcomes get dedicated variants because callers route
//! on them: `Network` means no response was received, `Status` carries a
//! well-formed non-2xx reply, and `Timeout` means the configured window
//! elapsed. `TokenStore` covers the fail-fast path where the credential read
//! itself fails and the request is never sent. The client never retries or
//! recovers locally; every variant reaches the caller with its content
//! unmodified.

use thiserror::Error;

use crate::token::TokenStoreError;

/// Errors returned by [`ApiClient`](crate::ApiClient) operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure with no response received.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status. The raw body is kept for
    /// debugging; the 403 case additionally triggers the session-expired
    /// notification before this error is returned.
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },

    /// No response arrived within the configured timeout window.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The token store failed while reading the credential; the request was
    /// never sent.
    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),

    /// The request payload could not be serialized to JSON.
    #[error("request serialization failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("response deserialization failed: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// The HTTP status code, when the server produced a response at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
