//! Domain models for search history entries and budget records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length for the `query` and `notes` fields of a history entry.
pub const MAX_TEXT_LEN: usize = 3000;

/// One recorded search, immutable after insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: i64,
    pub user_id: Uuid,
    pub query: String,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub result: serde_json::Value,
    pub parameters: serde_json::Value,
    pub notes: String,
    pub tags: serde_json::Value,
}

/// A history entry before insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub user_id: Uuid,
    pub query: String,
    pub timestamp: DateTime<Utc>,
    pub result: serde_json::Value,
    pub parameters: serde_json::Value,
    pub notes: String,
    pub tags: serde_json::Value,
}

/// An opaque binary budget payload. Raw bytes in the store, base64 on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetRecord {
    pub id: i64,
    pub contents: Vec<u8>,
}

/// Format a timestamp the way history responses carry it:
/// UTC, millisecond precision, `Z` suffix.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Serde helpers for the millisecond-precision `Z`-suffixed timestamp format.
mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
