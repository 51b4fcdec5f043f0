//! Data models for PubMed E-utilities responses and the exported report.
//!
//! Response models never fail on malformed fields: anything of the wrong
//! shape reads as absent and the caller substitutes a default.

mod record;
mod search;
mod summary;

pub use record::PaperRecord;
pub use search::{SearchResponse, SearchResult};
pub use summary::{AuthorRecord, DocumentSummary, SummaryResponse};

/// Placeholder for a missing value in the report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for a missing author name or affiliation.
pub const UNKNOWN: &str = "Unknown";

/// Deserializers that degrade wrong-typed JSON to empty values.
pub(crate) mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// A string, or `None` for null and any non-string value.
    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    /// A list of identifiers. Numbers are accepted as their decimal text;
    /// other entries are dropped and a non-array reads as empty.
    pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Value::Array(items) = Value::deserialize(deserializer)? else {
            return Ok(Vec::new());
        };

        Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect())
    }

    /// Each array element decoded independently; a non-array reads as empty.
    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let Value::Array(items) = Value::deserialize(deserializer)? else {
            return Ok(Vec::new());
        };

        Ok(items.into_iter().map(|item| serde_json::from_value(item).unwrap_or_default()).collect())
    }

    /// The value decoded as `T`, or `T::default()` if it has the wrong shape.
    pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }
}
