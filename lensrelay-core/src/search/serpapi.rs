//! SerpApi Google Lens client.
//!
//! Queries the SerpApi search endpoint with the `google_lens` engine and the
//! `visual_matches` result type, relaying the response body untouched.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use super::{SearchDocument, VisualSearch};
use crate::error::{RelayError, Result, Upstream};

/// Default SerpApi query endpoint.
const DEFAULT_API_URL: &str = "https://serpapi.com/search.json";

/// Fixed engine selector for reverse image search.
const ENGINE: &str = "google_lens";

/// Fixed result-type selector.
const RESULT_TYPE: &str = "visual_matches";

/// Default timeout for search requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the SerpApi client.
#[derive(Clone)]
pub struct SerpApiConfig {
    /// Query endpoint URL.
    pub api_url: String,
    /// API key, sent as the `api_key` query parameter.
    pub api_key: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl SerpApiConfig {
    /// Create a configuration for `api_key`, reading the endpoint from the
    /// `SERPAPI_API_URL` environment variable when set.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: std::env::var("SERPAPI_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for SerpApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerpApiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// SerpApi Google Lens client.
pub struct SerpApiLens {
    client: Client,
    config: SerpApiConfig,
}

impl SerpApiLens {
    /// Create a new client with the default endpoint and timeout.
    #[instrument(level = "debug", skip_all)]
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(SerpApiConfig::new(api_key))
    }

    /// Create a new client with custom configuration.
    #[instrument(level = "debug", skip_all, fields(api_url = %config.api_url))]
    pub fn with_config(config: SerpApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .https_only(true)
            .build()
            .map_err(|e| {
                warn!(error = %e, "Failed to create HTTP client");
                RelayError::unexpected(format!("Failed to create HTTP client: {e}"))
            })?;

        debug!("SerpApi client created");
        Ok(Self { client, config })
    }
}

#[async_trait]
impl VisualSearch for SerpApiLens {
    /// Query Google Lens via SerpApi for visual matches of `image_url`.
    #[instrument(
        level = "info",
        skip(self),
        fields(provider = "serpapi", engine = ENGINE)
    )]
    async fn lookup(&self, image_url: &str) -> Result<SearchDocument> {
        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[
                ("engine", ENGINE),
                ("api_key", self.config.api_key.as_str()),
                ("url", image_url),
                ("type", RESULT_TYPE),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Search request failed");
                RelayError::upstream(Upstream::VisualSearch, format!("search request failed: {e}"))
            })?;

        let status = response.status();
        debug!(status = %status, "Received search response");

        if !status.is_success() {
            warn!(status = %status, "Search rejected by provider");
            return Err(RelayError::upstream(
                Upstream::VisualSearch,
                format!("search returned status: {status}"),
            ));
        }

        let body = response.text().await.map_err(|e| {
            warn!(error = %e, "Failed to read search response");
            RelayError::upstream(
                Upstream::VisualSearch,
                format!("failed to read search response: {e}"),
            )
        })?;

        info!(document_len = body.len(), "Search completed");
        Ok(SearchDocument::from_raw(body))
    }

    fn name(&self) -> &'static str {
        "serpapi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        let lens = SerpApiLens::new("test-key");
        assert!(lens.is_ok());
    }

    #[test]
    fn test_fixed_selectors() {
        // The operation selectors are part of the outbound contract.
        assert_eq!(ENGINE, "google_lens");
        assert_eq!(RESULT_TYPE, "visual_matches");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = SerpApiConfig {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: "super-secret".into(),
            timeout: DEFAULT_TIMEOUT,
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("super-secret"));
    }
}
