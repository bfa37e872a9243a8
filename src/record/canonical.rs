//! Canonical byte form of a log record
//!
//! Hashing input must be stable: the same logical record must yield the
//! same bytes on every call, regardless of the key order a producer
//! used. Canonicalization here is self-consistent, not an external
//! canonical-JSON standard.
//!
//! Any pre-existing `logHash` field is stripped before serialization so
//! a record never hashes over its own digest.

use serde_json::Value;

use super::{LogRecord, LOG_HASH_KEY};

/// Deterministic UTF-8 byte serialization of a record.
///
/// Top-level keys are ordered lexicographically ascending; the record's
/// own `logHash` (if a producer re-submitted one) is excluded.
pub fn canonical_bytes(record: &LogRecord) -> Vec<u8> {
    let mut value = record.to_value();
    if let Value::Object(ref mut map) = value {
        map.remove(LOG_HASH_KEY);
    }
    // serde_json maps iterate in lexicographic key order, so Display
    // output is already deterministic for a given field set.
    value.to_string().into_bytes()
}
