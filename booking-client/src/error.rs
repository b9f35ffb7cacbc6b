//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (service unreachable, timeout, bad TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Service answered non-2xx with an error message (surfaced verbatim)
    #[error("{0}")]
    Service(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Message suitable for showing to the user.
    ///
    /// Service-reported messages pass through verbatim; transport
    /// failures collapse to a generic retryable notice.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Service(msg) => msg.clone(),
            _ => "Request failed. Please try again.".to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
