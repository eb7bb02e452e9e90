//! Core domain types
//!
//! These types mirror the JSON served by the manager's `/as-json` endpoint.
//! Fields the dashboard does not consume are ignored during deserialization.

pub mod report;
pub mod worker;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Deserializes an optional RFC 3339 timestamp, treating null and unparsable
/// values as absent.
pub(crate) fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }))
}
