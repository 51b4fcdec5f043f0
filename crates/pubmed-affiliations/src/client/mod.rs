//! PubMed E-utilities client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Optional retry middleware with exponential backoff (off by default)
//! - Status-code mapping into [`ClientError`]

use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{SearchResponse, SummaryResponse};

/// A decoded response together with the JSON body it was decoded from.
#[derive(Debug, Clone, Default)]
pub struct ApiResponse<T> {
    /// Typed view of the body.
    pub data: T,

    /// Body exactly as received.
    pub raw: serde_json::Value,
}

/// PubMed E-utilities client.
#[derive(Clone)]
pub struct PubMedClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// NCBI API key (optional).
    api_key: Option<String>,

    /// ESearch URL.
    esearch_url: String,

    /// ESummary URL.
    esummary_url: String,
}

impl PubMedClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, "application/json".parse()?);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let mut builder = ClientBuilder::new(client);
        if config.max_retries > 0 {
            let retry_policy = ExponentialBackoff::builder()
                .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
                .build_with_max_retries(config.max_retries);
            builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        Ok(Self {
            client: builder.build(),
            api_key: config.api_key,
            esearch_url: config.esearch_url,
            esummary_url: config.esummary_url,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search PubMed for up to `retmax` PMIDs matching `term`.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a body
    /// that is not JSON.
    pub async fn esearch(
        &self,
        term: &str,
        retmax: u32,
    ) -> ClientResult<ApiResponse<SearchResponse>> {
        let params = vec![
            ("db".to_string(), api::DATABASE.to_string()),
            ("term".to_string(), term.to_string()),
            ("retmode".to_string(), api::RETMODE.to_string()),
            ("retmax".to_string(), retmax.to_string()),
        ];

        self.get(&self.esearch_url, params).await
    }

    /// Fetch document summaries for all `ids` in a single request.
    ///
    /// An empty id list returns an empty response without a request.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a body
    /// that is not JSON.
    pub async fn esummary(&self, ids: &[String]) -> ClientResult<ApiResponse<SummaryResponse>> {
        if ids.is_empty() {
            return Ok(ApiResponse::default());
        }

        let params = vec![
            ("db".to_string(), api::DATABASE.to_string()),
            ("id".to_string(), ids.join(",")),
            ("retmode".to_string(), api::RETMODE.to_string()),
        ];

        self.get(&self.esummary_url, params).await
    }

    /// Make a GET request.
    async fn get<T>(
        &self,
        url: &str,
        mut params: Vec<(String, String)>,
    ) -> ClientResult<ApiResponse<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        if let Some(ref key) = self.api_key {
            params.push(("api_key".to_string(), key.clone()));
        }

        tracing::debug!(url, params = params.len(), "GET");

        let response = self.client.get(url).query(&params).send().await?;

        let response = self.handle_response(response).await?;
        let raw: serde_json::Value = response.json().await?;
        let data = serde_json::from_value(raw.clone())?;

        Ok(ApiResponse { data, raw })
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for PubMedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubMedClient")
            .field("esearch_url", &self.esearch_url)
            .field("esummary_url", &self.esummary_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
