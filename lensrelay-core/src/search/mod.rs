//! Reverse-image-search providers.
//!
//! A provider is queried with a publicly hosted image URL and answers with
//! an opaque JSON document of visual matches. The relay does not interpret
//! the document; it is handed back to the caller exactly as received.

mod mock;
mod serpapi;

pub use mock::{MockVisualSearch, SAMPLE_DOCUMENT};
pub use serpapi::{SerpApiConfig, SerpApiLens};

use async_trait::async_trait;

use crate::error::Result;

/// Raw JSON document returned by a search provider.
///
/// The shape is defined entirely by the provider and may drift; nothing in
/// this crate validates it beyond the transport-level success check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDocument(String);

impl SearchDocument {
    /// Wrap the provider's raw response text.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw document text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the document, yielding the raw text.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// An external reverse-image-search service.
#[async_trait]
pub trait VisualSearch: Send + Sync {
    /// Run a reverse image search for `image_url` and return the provider's
    /// raw result document. A single outbound request; no retries.
    async fn lookup(&self, image_url: &str) -> Result<SearchDocument>;

    /// Provider identifier used in logs.
    fn name(&self) -> &'static str;
}
