//! String encodings of event timestamps.
//!
//! Stores return RFC 3339 timestamps; the event form edits them in the
//! `datetime-local` shape (`2024-06-15T14:00`). Offset-less values are taken
//! as local wall-clock time.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{de, Deserialize, Deserializer};

/// Format used by the event form's start/end fields
pub const FORM_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    FORM_TIMESTAMP_FORMAT,
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a stored or user-entered timestamp.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local));
    }

    // Postgres renders `timestamptz` with a space separator and short offset
    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(parsed.with_timezone(&Local));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

/// Render a timestamp for the form's text fields
pub fn format_form_timestamp(value: &DateTime<Local>) -> String {
    value.format(FORM_TIMESTAMP_FORMAT).to_string()
}

pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{}'", raw)))
}
