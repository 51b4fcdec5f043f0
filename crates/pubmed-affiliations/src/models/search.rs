//! ESearch response model.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Top-level ESearch JSON body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Search result block.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub esearchresult: Option<SearchResult>,
}

impl SearchResponse {
    /// Matching PMIDs in the order returned by the API.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        self.esearchresult.as_ref().map_or(&[], |r| r.idlist.as_slice())
    }

    /// Error message reported by ESearch inside a 200 response, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.esearchresult.as_ref()?.error.as_deref()
    }
}

/// The `esearchresult` block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matches (as text, like the API sends it).
    #[serde(default, deserialize_with = "lenient::string")]
    pub count: Option<String>,

    /// Matching PMIDs.
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub idlist: Vec<String>,

    /// Query error reported by E-utilities.
    #[serde(default, rename = "ERROR", deserialize_with = "lenient::string")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_in_api_order() {
        let response: SearchResponse = serde_json::from_value(json!({
            "header": {"type": "esearch", "version": "0.3"},
            "esearchresult": {"count": "3", "retmax": "3", "idlist": ["39", "12", "27"]}
        }))
        .unwrap();

        assert_eq!(response.ids(), ["39", "12", "27"]);
        assert_eq!(response.esearchresult.unwrap().count.as_deref(), Some("3"));
    }

    #[test]
    fn test_missing_result_block_has_no_ids() {
        let response: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.ids().is_empty());
    }

    #[test]
    fn test_wrong_shapes_read_as_empty() {
        let response: SearchResponse =
            serde_json::from_value(json!({"esearchresult": "unavailable"})).unwrap();
        assert!(response.ids().is_empty());

        let response: SearchResponse =
            serde_json::from_value(json!({"esearchresult": {"idlist": {"0": "1"}}})).unwrap();
        assert!(response.ids().is_empty());
    }

    #[test]
    fn test_numeric_ids_kept_as_text() {
        let response: SearchResponse =
            serde_json::from_value(json!({"esearchresult": {"idlist": [101, "102", null]}}))
                .unwrap();
        assert_eq!(response.ids(), ["101", "102"]);
    }

    #[test]
    fn test_error_field() {
        let response: SearchResponse = serde_json::from_value(json!({
            "esearchresult": {"ERROR": "Invalid query", "idlist": []}
        }))
        .unwrap();
        assert_eq!(response.error(), Some("Invalid query"));
    }
}
