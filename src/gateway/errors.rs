//! # Gateway Errors
//!
//! Error taxonomy for storage gateway operations. Backend-originated
//! failures are caught at the gateway boundary and re-mapped here; raw
//! backend errors never leak verbatim to clients beyond a
//! human-readable summary.

use thiserror::Error;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Gateway operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Content identifier fails the surface shape check or the backend
    /// rejected it as malformed. The caller fixes the input.
    #[error("Invalid content identifier: {0}")]
    InvalidIdentifier(String),

    /// Identifier is well-formed but the backend holds no matching
    /// record. Terminal for this call; not retried by this layer.
    #[error("No stored record for content identifier: {0}")]
    NotFound(String),

    /// Transient or unknown backend failure. Retryable by the caller.
    #[error("Backend failure: {0}")]
    Backend(String),

    /// Backend session handshake failed. Fatal during server startup;
    /// retried lazily on the next first-use when hit mid-run.
    #[error("Backend session initialization failed: {0}")]
    Init(String),
}

impl GatewayError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::InvalidIdentifier(_) => 400,
            GatewayError::NotFound(_) => 404,
            GatewayError::Backend(_) => 500,
            GatewayError::Init(_) => 500,
        }
    }

    /// Classify a raw backend failure message per the mapping policy:
    /// malformed-identifier wording becomes a client error, absence
    /// wording becomes not-found, everything else is a backend error.
    pub fn from_backend_failure(identifier: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_lowercase();
        if lowered.contains("invalid") || lowered.contains("malformed") {
            GatewayError::InvalidIdentifier(identifier.to_string())
        } else if lowered.contains("not found") || lowered.contains("no such") {
            GatewayError::NotFound(identifier.to_string())
        } else {
            GatewayError::Backend(message)
        }
    }
}
