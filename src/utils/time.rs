// src/utils/time.rs

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Parses an instant. A trailing `Z` is treated as `+00:00`.
///
/// Accepts RFC 3339 (`2025-03-10T15:00:00.5+00:00`), the Postgres text
/// rendering (`2025-03-10 15:00:00.5+00`) and ISO 8601 without an offset
/// (`2025-03-10T15:00:00`), which is read as UTC.
pub fn parse_instant(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    let normalized = match raw.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => raw.to_string(),
    };

    DateTime::parse_from_rfc3339(&normalized)
        .or_else(|_| DateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S%.f%#z"))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| naive.and_utc().fixed_offset())
        })
}

/// Serde adapter for request timestamps, using [`parse_instant`].
pub fn deserialize_instant<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_instant(&raw).map_err(|e| {
        serde::de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e))
    })
}

/// Whole seconds from `started` to `submitted`, truncated toward zero.
pub fn elapsed_seconds(started: &str, submitted: &str) -> Result<i64, chrono::ParseError> {
    let started = parse_instant(started)?;
    let submitted = parse_instant(submitted)?;
    Ok((submitted - started).num_seconds())
}
