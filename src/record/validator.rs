//! Record validator
//!
//! Enforces the minimal schema a record must satisfy before it is
//! eligible for storage:
//!
//! - the payload is a JSON object
//! - `sourceId` is a string with non-whitespace content
//! - `eventType` is a string with non-whitespace content
//! - `timestamp` is a non-empty string that parses as a calendar date-time
//!
//! Rules are checked in order and short-circuit on the first failure.
//! Validation never mutates its input and never contacts the backend.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use super::errors::{ValidationError, ValidationResult};
use super::LogRecord;

/// Validate a dynamic JSON payload into a typed [`LogRecord`].
///
/// Fields beyond the required three are preserved in the record's
/// extension bag, including any `logHash` a producer re-submitted.
pub fn validate(value: Value) -> ValidationResult<LogRecord> {
    let mut map = match value {
        Value::Object(map) => map,
        _ => return Err(ValidationError::NotAnObject),
    };

    let source_id = match map.remove("sourceId") {
        Some(Value::String(s)) if !s.trim().is_empty() => s,
        _ => return Err(ValidationError::MissingSourceId),
    };

    let event_type = match map.remove("eventType") {
        Some(Value::String(s)) if !s.trim().is_empty() => s,
        _ => return Err(ValidationError::MissingEventType),
    };

    let timestamp = match map.remove("timestamp") {
        Some(Value::String(s)) if !s.is_empty() => s,
        _ => return Err(ValidationError::MissingTimestamp),
    };
    if !parses_as_datetime(&timestamp) {
        return Err(ValidationError::InvalidTimestamp(timestamp));
    }

    Ok(LogRecord::from_parts(source_id, event_type, timestamp, map))
}

/// Accept RFC 3339 first, then the naive forms producers commonly send.
fn parses_as_datetime(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "sourceId": "dev1",
            "eventType": "click",
            "timestamp": "2024-01-01T00:00:00Z"
        })
    }

    #[test]
    fn test_accepts_minimal_record() {
        let record = validate(minimal()).unwrap();
        assert_eq!(record.source_id(), "dev1");
        assert_eq!(record.event_type(), "click");
        assert_eq!(record.timestamp(), "2024-01-01T00:00:00Z");
        assert!(record.extra().is_empty());
    }

    #[test]
    fn test_preserves_extension_fields() {
        let mut value = minimal();
        value["level"] = json!("error");
        value["attempt"] = json!(2);

        let record = validate(value).unwrap();
        assert_eq!(record.extra().get("level"), Some(&json!("error")));
        assert_eq!(record.extra().get("attempt"), Some(&json!(2)));
    }

    #[test]
    fn test_rejects_non_object() {
        assert_eq!(validate(json!(null)), Err(ValidationError::NotAnObject));
        assert_eq!(validate(json!([1, 2])), Err(ValidationError::NotAnObject));
        assert_eq!(validate(json!("log")), Err(ValidationError::NotAnObject));
    }

    #[test]
    fn test_rejects_missing_or_empty_source_id() {
        let mut value = minimal();
        value.as_object_mut().unwrap().remove("sourceId");
        assert_eq!(validate(value), Err(ValidationError::MissingSourceId));

        let mut value = minimal();
        value["sourceId"] = json!("");
        assert_eq!(validate(value), Err(ValidationError::MissingSourceId));

        let mut value = minimal();
        value["sourceId"] = json!(42);
        assert_eq!(validate(value), Err(ValidationError::MissingSourceId));
    }

    #[test]
    fn test_rejects_whitespace_event_type() {
        let mut value = minimal();
        value["eventType"] = json!("   ");
        assert_eq!(validate(value), Err(ValidationError::MissingEventType));

        let mut value = minimal();
        value.as_object_mut().unwrap().remove("eventType");
        assert_eq!(validate(value), Err(ValidationError::MissingEventType));
    }

    #[test]
    fn test_rejects_missing_timestamp() {
        let mut value = minimal();
        value.as_object_mut().unwrap().remove("timestamp");
        assert_eq!(validate(value), Err(ValidationError::MissingTimestamp));

        let mut value = minimal();
        value["timestamp"] = json!("");
        assert_eq!(validate(value), Err(ValidationError::MissingTimestamp));
    }

    #[test]
    fn test_rejects_unparseable_timestamp() {
        let mut value = minimal();
        value["timestamp"] = json!("not-a-date");
        assert_eq!(
            validate(value),
            Err(ValidationError::InvalidTimestamp("not-a-date".into()))
        );
    }

    #[test]
    fn test_accepts_naive_forms() {
        for ts in ["2024-06-01T12:00:00", "2024-06-01"] {
            let mut value = minimal();
            value["timestamp"] = json!(ts);
            assert!(validate(value).is_ok(), "should accept {}", ts);
        }
    }

    #[test]
    fn test_validation_order_short_circuits() {
        // Both sourceId and timestamp are bad; sourceId is reported first.
        let value = json!({"eventType": "click", "timestamp": "bogus"});
        assert_eq!(validate(value), Err(ValidationError::MissingSourceId));
    }
}
