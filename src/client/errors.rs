//! # Client Facade Errors

use thiserror::Error;

/// Result type for client facade operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the client facade
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API endpoint is required.")]
    MissingEndpoint,

    #[error("A valid content identifier is required.")]
    InvalidIdentifier,

    #[error("API request failed: {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode API response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status_and_message() {
        let err = ClientError::Api {
            status: 404,
            message: "No stored record".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("No stored record"));
    }
}
