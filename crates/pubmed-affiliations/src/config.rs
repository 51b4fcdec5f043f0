//! Configuration for the PubMed affiliation exporter.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// ESearch endpoint (query -> PMIDs).
    pub const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";

    /// ESummary endpoint (PMIDs -> document summaries).
    pub const ESUMMARY_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi";

    /// Entrez database queried by both stages.
    pub const DATABASE: &str = "pubmed";

    /// Response format requested from both stages.
    pub const RETMODE: &str = "json";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Number of identifiers requested from ESearch.
    pub const DEFAULT_MAX_RESULTS: u32 = 20;

    /// Output file used when none is given.
    pub const DEFAULT_OUTPUT_FILE: &str = "research_papers.csv";
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// NCBI API key (optional).
    pub api_key: Option<String>,

    /// ESearch URL (for testing with mock servers).
    pub esearch_url: String,

    /// ESummary URL (for testing with mock servers).
    pub esummary_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Retries for transient failures. Zero disables the retry middleware.
    pub max_retries: u32,
}

impl Config {
    /// Create a new configuration with optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            esearch_url: api::ESEARCH_URL.to_string(),
            esummary_url: api::ESUMMARY_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_retries: 0,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            esearch_url: format!("{}/entrez/eutils/esearch.fcgi", base_url),
            esummary_url: format!("{}/entrez/eutils/esummary.fcgi", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_retries: 0,
        }
    }

    /// Set the number of retries for transient failures.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
