//! Mock search provider for testing.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{SearchDocument, VisualSearch};
use crate::error::{RelayError, Result, Upstream};

/// Canned document returned by [`MockVisualSearch::default`].
pub const SAMPLE_DOCUMENT: &str =
    r#"{"search_metadata":{"status":"Success"},"visual_matches":[{"position":1,"title":"Sample match"}]}"#;

/// Mock search provider for testing.
///
/// Records every looked-up URL and answers with a canned document or a
/// forced failure. Not for production use.
pub struct MockVisualSearch {
    document: String,
    fail: bool,
    lookups: Mutex<Vec<String>>,
}

impl MockVisualSearch {
    /// A mock that answers every lookup with `document`.
    pub fn returning(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            fail: false,
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// A mock whose lookups always fail.
    pub fn failing() -> Self {
        Self {
            document: String::new(),
            fail: true,
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Number of lookup calls received.
    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }

    /// Target URL of the most recent lookup call.
    pub fn last_lookup(&self) -> Option<String> {
        self.lookups.lock().unwrap().last().cloned()
    }
}

impl Default for MockVisualSearch {
    fn default() -> Self {
        Self::returning(SAMPLE_DOCUMENT)
    }
}

#[async_trait]
impl VisualSearch for MockVisualSearch {
    async fn lookup(&self, image_url: &str) -> Result<SearchDocument> {
        self.lookups.lock().unwrap().push(image_url.to_string());
        if self.fail {
            return Err(RelayError::upstream(
                Upstream::VisualSearch,
                "mock search failure",
            ));
        }
        Ok(SearchDocument::from_raw(self.document.clone()))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returning_mock_records_lookups() {
        let search = MockVisualSearch::default();

        let doc = search.lookup("https://images.example/a.png").await.unwrap();
        assert_eq!(doc.as_str(), SAMPLE_DOCUMENT);
        assert_eq!(search.lookup_count(), 1);
        assert_eq!(
            search.last_lookup().as_deref(),
            Some("https://images.example/a.png")
        );
    }

    #[tokio::test]
    async fn test_failing_mock_still_records_the_call() {
        let search = MockVisualSearch::failing();

        let result = search.lookup("https://images.example/a.png").await;
        assert!(matches!(
            result,
            Err(RelayError::Upstream {
                upstream: Upstream::VisualSearch,
                ..
            })
        ));
        assert_eq!(search.lookup_count(), 1);
    }
}
