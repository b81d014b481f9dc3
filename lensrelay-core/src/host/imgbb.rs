//! ImgBB image-hosting client.
//!
//! Uploads a base64 payload as a form-encoded POST to the ImgBB upload
//! endpoint, with the API key passed as a query parameter, and extracts the
//! hosted URL from the JSON response.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::ImageHost;
use crate::error::{RelayError, Result, Upstream};

/// Default ImgBB upload endpoint.
const DEFAULT_API_URL: &str = "https://api.imgbb.com/1/upload";

/// Default timeout for upload requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Response structure from the ImgBB upload API.
///
/// The full response carries many more fields; only the hosted URL is
/// relevant here, and a body without it is treated as an upstream failure.
#[derive(Debug, Deserialize)]
struct ImgbbResponse {
    data: ImgbbImage,
}

#[derive(Debug, Deserialize)]
struct ImgbbImage {
    url: String,
}

/// Configuration for the ImgBB client.
#[derive(Clone)]
pub struct ImgbbConfig {
    /// Upload endpoint URL.
    pub api_url: String,
    /// API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ImgbbConfig {
    /// Create a configuration for `api_key`, reading the endpoint from the
    /// `IMGBB_API_URL` environment variable when set.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: std::env::var("IMGBB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for ImgbbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImgbbConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// ImgBB image-hosting client.
pub struct ImgbbHost {
    client: Client,
    config: ImgbbConfig,
}

impl ImgbbHost {
    /// Create a new client with the default endpoint and timeout.
    #[instrument(level = "debug", skip_all)]
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ImgbbConfig::new(api_key))
    }

    /// Create a new client with custom configuration.
    #[instrument(level = "debug", skip_all, fields(api_url = %config.api_url))]
    pub fn with_config(config: ImgbbConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .https_only(true)
            .build()
            .map_err(|e| {
                warn!(error = %e, "Failed to create HTTP client");
                RelayError::unexpected(format!("Failed to create HTTP client: {e}"))
            })?;

        debug!("ImgBB client created");
        Ok(Self { client, config })
    }
}

#[async_trait]
impl ImageHost for ImgbbHost {
    /// Submit the base64 payload and return the hosted URL.
    ///
    /// Any send failure, non-success status, or response missing the URL
    /// field is terminal for the request; there is no retry.
    #[instrument(
        level = "info",
        skip(self, image_base64),
        fields(provider = "imgbb", payload_len = image_base64.len())
    )]
    async fn upload(&self, image_base64: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.config.api_url)
            .query(&[("key", self.config.api_key.as_str())])
            .form(&[("image", image_base64)])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Upload request failed");
                RelayError::upstream(Upstream::ImageHost, format!("upload request failed: {e}"))
            })?;

        let status = response.status();
        debug!(status = %status, "Received upload response");

        if !status.is_success() {
            warn!(status = %status, "Upload rejected by host");
            return Err(RelayError::upstream(
                Upstream::ImageHost,
                format!("upload returned status: {status}"),
            ));
        }

        let body: ImgbbResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse upload response");
            RelayError::upstream(
                Upstream::ImageHost,
                format!("failed to parse upload response: {e}"),
            )
        })?;

        info!(image_url = %body.data.url, "Image hosted");
        Ok(body.data.url)
    }

    fn name(&self) -> &'static str {
        "imgbb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        let host = ImgbbHost::new("test-key");
        assert!(host.is_ok());
    }

    #[test]
    fn test_config_default_endpoint() {
        let config = ImgbbConfig {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: "k".into(),
            timeout: DEFAULT_TIMEOUT,
        };
        assert_eq!(config.api_url, "https://api.imgbb.com/1/upload");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ImgbbConfig {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: "super-secret".into(),
            timeout: DEFAULT_TIMEOUT,
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_response_extracts_nested_url() {
        let body = r#"{
            "data": {
                "id": "2ndCYJK",
                "url": "https://i.ibb.co/w04Prt6/example.jpg",
                "display_url": "https://i.ibb.co/98W13PY/example.jpg"
            },
            "success": true,
            "status": 200
        }"#;
        let parsed: ImgbbResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.url, "https://i.ibb.co/w04Prt6/example.jpg");
    }

    #[test]
    fn test_response_missing_url_is_error() {
        let body = r#"{"data": {"id": "2ndCYJK"}, "success": true}"#;
        assert!(serde_json::from_str::<ImgbbResponse>(body).is_err());
    }

    #[test]
    fn test_response_missing_data_is_error() {
        let body = r#"{"success": false, "status": 400}"#;
        assert!(serde_json::from_str::<ImgbbResponse>(body).is_err());
    }
}
