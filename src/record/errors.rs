//! # Record Validation Errors

use thiserror::Error;

/// Result type for record validation and decoding
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Why a submitted record is not eligible for storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Log data is required and must be a JSON object.")]
    NotAnObject,

    #[error("Log data must include a non-empty \"sourceId\" string.")]
    MissingSourceId,

    #[error("Log data must include a non-empty \"eventType\" string.")]
    MissingEventType,

    #[error("Log data must include a non-empty \"timestamp\" string.")]
    MissingTimestamp,

    #[error("Log data \"timestamp\" must be a valid date-time string: {0}")]
    InvalidTimestamp(String),

    #[error("Stored record is missing its \"logHash\" field.")]
    MissingLogHash,

    #[error("Stored record is not valid JSON: {0}")]
    Decode(String),
}

impl ValidationError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        // Every validation failure is a client error the producer can fix.
        400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ValidationError::NotAnObject.status_code(), 400);
        assert_eq!(
            ValidationError::InvalidTimestamp("nope".into()).status_code(),
            400
        );
    }

    #[test]
    fn test_messages_name_the_field() {
        assert!(ValidationError::MissingSourceId.to_string().contains("sourceId"));
        assert!(ValidationError::MissingEventType.to_string().contains("eventType"));
        assert!(ValidationError::MissingTimestamp.to_string().contains("timestamp"));
    }
}
