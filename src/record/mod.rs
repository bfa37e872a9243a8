//! # Log Record Module
//!
//! Typed log records and the content-integrity pipeline:
//! validation, canonical serialization, and digest computation.
//!
//! A `LogRecord` is only ever constructed through `validate` or the
//! builder, and its fields are private. Once a digest has been computed
//! the record cannot be mutated underneath it.

pub mod canonical;
pub mod digest;
pub mod errors;
pub mod validator;

pub use canonical::canonical_bytes;
pub use digest::{record_digest, sha256_hex};
pub use errors::{ValidationError, ValidationResult};
pub use validator::validate;

use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Top-level key carrying the integrity digest inside a stored record.
pub const LOG_HASH_KEY: &str = "logHash";

/// A structured log/event record.
///
/// Three fields are required (`sourceId`, `eventType`, `timestamp`);
/// everything else the producer sent rides along in the extension bag.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    source_id: String,
    event_type: String,
    timestamp: String,
    extra: Map<String, Value>,
}

impl LogRecord {
    /// Create a record with the required fields only.
    ///
    /// The arguments are taken as-is; use [`validate`] when the input
    /// comes from an untrusted source.
    pub fn new(
        source_id: impl Into<String>,
        event_type: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            event_type: event_type.into(),
            timestamp: timestamp.into(),
            extra: Map::new(),
        }
    }

    /// Attach an additional field to the extension bag.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub(crate) fn from_parts(
        source_id: String,
        event_type: String,
        timestamp: String,
        extra: Map<String, Value>,
    ) -> Self {
        Self {
            source_id,
            event_type,
            timestamp,
            extra,
        }
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Extension fields beyond the required three.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Full JSON object form of the record.
    ///
    /// `serde_json::Map` keeps keys in lexicographic order, so the
    /// resulting object is deterministic for a given field set.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        map.insert("sourceId".to_string(), Value::String(self.source_id.clone()));
        map.insert(
            "eventType".to_string(),
            Value::String(self.event_type.clone()),
        );
        map.insert("timestamp".to_string(), Value::String(self.timestamp.clone()));
        Value::Object(map)
    }
}

impl Serialize for LogRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// A log record sealed with its integrity digest.
///
/// This is the durable form: the record plus a `logHash` field holding
/// the digest of the canonical bytes. Serialized as pretty-printed JSON
/// so stored records remain human-readable when downloaded.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    record: LogRecord,
    log_hash: String,
}

impl StoredRecord {
    /// Compute the record's digest and seal it.
    ///
    /// Any stale `logHash` the producer sent is replaced by the freshly
    /// computed digest.
    pub fn seal(record: LogRecord) -> Self {
        let log_hash = record_digest(&record);
        Self { record, log_hash }
    }

    pub fn record(&self) -> &LogRecord {
        &self.record
    }

    pub fn log_hash(&self) -> &str {
        &self.log_hash
    }

    /// JSON object form: the record's fields plus `logHash`.
    pub fn to_value(&self) -> Value {
        let mut value = self.record.to_value();
        if let Value::Object(ref mut map) = value {
            map.insert(
                LOG_HASH_KEY.to_string(),
                Value::String(self.log_hash.clone()),
            );
        }
        value
    }

    /// Byte form handed to the storage backend.
    pub fn to_bytes(&self) -> Vec<u8> {
        // Value -> pretty string cannot fail for plain JSON data.
        serde_json::to_string_pretty(&self.to_value())
            .unwrap_or_else(|_| self.to_value().to_string())
            .into_bytes()
    }

    /// Decode bytes previously produced by [`StoredRecord::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> ValidationResult<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| ValidationError::Decode(e.to_string()))?;
        Self::from_value(value)
    }

    /// Decode a JSON value holding a record with its `logHash` field.
    pub fn from_value(value: Value) -> ValidationResult<Self> {
        let record = validate(value)?;
        let log_hash = match record.extra().get(LOG_HASH_KEY) {
            Some(Value::String(hash)) => hash.clone(),
            _ => return Err(ValidationError::MissingLogHash),
        };
        // The digest lives on the sealed wrapper, not in the extension bag.
        let mut extra = record.extra.clone();
        extra.remove(LOG_HASH_KEY);
        let record = LogRecord {
            extra,
            ..record
        };
        Ok(Self { record, log_hash })
    }
}

impl Serialize for StoredRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
