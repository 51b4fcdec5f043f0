//! ESummary response model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{NOT_AVAILABLE, UNKNOWN, lenient};

/// Top-level ESummary JSON body.
///
/// `result` is kept as raw JSON and decoded per identifier, so one malformed
/// document never affects the others.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Document summaries keyed by PMID (plus the API's own `uids` list).
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub result: Map<String, Value>,
}

impl SummaryResponse {
    /// Decode the summary for one PMID, if the response contains it.
    #[must_use]
    pub fn document(&self, id: &str) -> Option<DocumentSummary> {
        self.result.get(id).map(DocumentSummary::from_value)
    }

    /// True when the `result` block is missing or empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }
}

/// Summary metadata for a single paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Paper title.
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,

    /// Publication date as free text (e.g. "2024 Mar 5").
    #[serde(default, deserialize_with = "lenient::string")]
    pub pubdate: Option<String>,

    /// Author list.
    #[serde(default, deserialize_with = "lenient::list")]
    pub authors: Vec<AuthorRecord>,
}

impl DocumentSummary {
    /// Decode a summary; anything that is not an object reads as empty.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Title, or "N/A".
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Publication date, or "N/A".
    #[must_use]
    pub fn pubdate_or_default(&self) -> &str {
        self.pubdate.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// One entry of a summary's author list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    /// Author name (e.g. "Smith J").
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,

    /// Free-text affiliation.
    #[serde(default, deserialize_with = "lenient::string")]
    pub affiliation: Option<String>,

    /// Contact email, normally only present for the corresponding author.
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: Option<String>,
}

impl AuthorRecord {
    /// Get the author name, falling back to "Unknown" if not available.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN)
    }

    /// Get the raw affiliation, falling back to "Unknown" if not available.
    #[must_use]
    pub fn affiliation_or_default(&self) -> &str {
        self.affiliation.as_deref().unwrap_or(UNKNOWN)
    }

    /// Get the email, falling back to "N/A" if not available.
    #[must_use]
    pub fn email_or_default(&self) -> &str {
        self.email.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}
