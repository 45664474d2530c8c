//! Recursive datetime normalization for outgoing JSON payloads.
//!
//! HubSpot reports timestamps inconsistently across its APIs: the CRM v3
//! endpoints return RFC 3339 strings while the legacy v1 engagements
//! endpoints return epoch milliseconds. Every payload leaving this server is
//! passed through [`convert_datetime_fields`] so callers always see the same
//! fixed string format.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Lower bound of the epoch-millisecond window treated as a datetime
/// (2001-09-09T01:46:40Z). Values below this (durations, record ids,
/// actor ids) pass through untouched.
const EPOCH_MILLIS_MIN: i64 = 1_000_000_000_000;

/// Exclusive upper bound of the epoch-millisecond window
/// (2286-11-20T17:46:40Z).
const EPOCH_MILLIS_MAX: i64 = 10_000_000_000_000;

/// Recursively convert every date value in a JSON tree to a fixed string
/// format (RFC 3339 UTC with millisecond precision, e.g.
/// `2024-01-15T10:00:00.000Z`).
///
/// A date value is either a string parseable as RFC 3339 or an integer
/// inside the epoch-millisecond window. All other values are returned
/// unchanged. The conversion is idempotent: normalizing an
/// already-normalized tree yields the same tree.
pub fn convert_datetime_fields(value: Value) -> Value {
    match value {
        Value::String(s) => match normalize_datetime_string(&s) {
            Some(normalized) => Value::String(normalized),
            None => Value::String(s),
        },
        Value::Number(n) => match epoch_millis_to_string(&n) {
            Some(normalized) => Value::String(normalized),
            None => Value::Number(n),
        },
        Value::Array(items) => {
            Value::Array(items.into_iter().map(convert_datetime_fields).collect())
        }
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, val)| (key, convert_datetime_fields(val)))
                .collect(),
        ),
        other => other,
    }
}

/// Re-render an RFC 3339 string in the canonical format, or None if the
/// string is not a datetime.
fn normalize_datetime_string(s: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(s).ok()?;
    Some(
        parsed
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Render an integer inside the epoch-millisecond window in the canonical
/// format, or None if the number is not a plausible timestamp.
fn epoch_millis_to_string(n: &serde_json::Number) -> Option<String> {
    let millis = n.as_i64()?;
    if !(EPOCH_MILLIS_MIN..EPOCH_MILLIS_MAX).contains(&millis) {
        return None;
    }
    let dt = DateTime::from_timestamp_millis(millis)?;
    Some(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}
