//! Integrity digest computation
//!
//! SHA-256 over the canonical byte form, hex-encoded lowercase.
//! Collision resistance is the integrity guarantee; uploaded bytes are
//! not re-verified against the digest after backend storage.

use sha2::{Digest, Sha256};

use super::canonical::canonical_bytes;
use super::LogRecord;

/// Computes the lowercase hex SHA-256 digest of the given bytes.
///
/// Deterministic: the same input always produces the same output.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Digest of a record's canonical byte form.
pub fn record_digest(record: &LogRecord) -> String {
    sha256_hex(&canonical_bytes(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_digest_shape() {
        let digest = sha256_hex(b"payload");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_digest_deterministic() {
        assert_eq!(sha256_hex(b"same input"), sha256_hex(b"same input"));
    }

    #[test]
    fn test_record_digest_ignores_insertion_order() {
        let first = LogRecord::new("dev1", "click", "2024-01-01T00:00:00Z")
            .with_field("a", json!(1))
            .with_field("b", json!(2));
        let second = LogRecord::new("dev1", "click", "2024-01-01T00:00:00Z")
            .with_field("b", json!(2))
            .with_field("a", json!(1));
        assert_eq!(record_digest(&first), record_digest(&second));
    }

    #[test]
    fn test_record_digest_detects_value_change() {
        let base = LogRecord::new("dev1", "click", "2024-01-01T00:00:00Z")
            .with_field("count", json!(1));
        let changed = LogRecord::new("dev1", "click", "2024-01-01T00:00:00Z")
            .with_field("count", json!(2));
        assert_ne!(record_digest(&base), record_digest(&changed));
    }
}
