//! Lenient field decoders.
//!
//! The backend is not strict about its JSON: prices come back as numeric strings, rows
//! written by older clients miss fields, and timestamps use whatever format Flask picked.
//! These decoders coerce every field into a usable value instead of failing the whole
//! listing:
//!
//! - numbers accept JSON numbers or numeric strings; anything else becomes `0`;
//! - counts additionally truncate fractions and clamp negatives to `0`;
//! - a missing or blank name becomes [`PLACEHOLDER_NAME`];
//! - timestamps accept RFC 3339, RFC 2822 and naive `YYYY-MM-DD HH:MM:SS` (read as UTC).
//!
//! Missing keys never reach a decoder, so fields pair these with `#[serde(default)]`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Display name used for products whose name is missing.
pub const PLACEHOLDER_NAME: &str = "Unknown Product";

pub fn placeholder_name() -> String {
    PLACEHOLDER_NAME.to_string()
}

fn value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null))
}

fn as_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn as_count(value: &Value) -> u32 {
    match as_f64(value) {
        Some(n) if n > 0.0 => n.trunc().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

/// Decimal field; non-numeric input becomes `0.0`.
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(as_f64(&value(deserializer)?).unwrap_or(0.0))
}

/// Non-negative integer field.
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(as_count(&value(deserializer)?))
}

/// Identifier field of any id newtype.
pub fn id<'de, D, I>(deserializer: D) -> Result<I, D::Error>
where
    D: Deserializer<'de>,
    I: From<u32>,
{
    Ok(I::from(as_count(&value(deserializer)?)))
}

/// Product name, falling back to the placeholder.
pub fn name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match value(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => s,
        Value::Number(n) => n.to_string(),
        _ => placeholder_name(),
    })
}

/// Free text, falling back to an empty string.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match value(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Required timestamp; unreadable input becomes the decode time.
pub fn timestamp_or_now<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    Ok(optional_from(&value(deserializer)?).unwrap_or_else(Utc::now))
}

/// Optional timestamp; unreadable input counts as absent.
pub fn optional_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    Ok(optional_from(&value(deserializer)?))
}

fn optional_from(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp(s),
        _ => None,
    }
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = DateTime::parse_from_rfc2822(raw) {
        return Some(t.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn numbers_accept_strings_and_reject_garbage() {
        assert_eq!(as_f64(&json!(10.5)), Some(10.5));
        assert_eq!(as_f64(&json!(" 10.99 ")), Some(10.99));
        assert_eq!(as_f64(&json!("abc")), None);
        assert_eq!(as_f64(&json!(true)), None);
        assert_eq!(as_f64(&Value::Null), None);
    }

    #[test]
    fn counts_truncate_and_clamp() {
        assert_eq!(as_count(&json!(3.7)), 3);
        assert_eq!(as_count(&json!("12")), 12);
        assert_eq!(as_count(&json!(-4)), 0);
        assert_eq!(as_count(&json!({"n": 1})), 0);
    }

    #[test]
    fn timestamps_in_backend_formats() {
        let flask = parse_timestamp("Tue, 14 Jan 2025 09:30:00 GMT").unwrap();
        assert_eq!((flask.year(), flask.month(), flask.day()), (2025, 1, 14));
        assert_eq!(flask.hour(), 9);

        let iso = parse_timestamp("2025-01-14T09:30:00.250Z").unwrap();
        assert_eq!(iso.minute(), 30);

        let naive = parse_timestamp("2025-01-14 09:30:00").unwrap();
        assert_eq!(naive, flask);

        assert!(parse_timestamp("yesterday").is_none());
    }
}
