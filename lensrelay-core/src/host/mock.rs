//! Mock image host for testing.

use std::sync::Mutex;

use async_trait::async_trait;

use super::ImageHost;
use crate::error::{RelayError, Result, Upstream};

/// Mock image host for testing.
///
/// Records every upload payload and returns either a fixed URL or a forced
/// failure. Not for production use.
pub struct MockImageHost {
    url: String,
    fail: bool,
    uploads: Mutex<Vec<String>>,
}

impl MockImageHost {
    /// A mock that hosts every upload at `url`.
    pub fn returning(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            fail: false,
            uploads: Mutex::new(Vec::new()),
        }
    }

    /// A mock whose uploads always fail.
    pub fn failing() -> Self {
        Self {
            url: String::new(),
            fail: true,
            uploads: Mutex::new(Vec::new()),
        }
    }

    /// Number of upload calls received.
    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    /// Payload of the most recent upload call.
    pub fn last_upload(&self) -> Option<String> {
        self.uploads.lock().unwrap().last().cloned()
    }
}

impl Default for MockImageHost {
    fn default() -> Self {
        Self::returning("https://images.example/mock.jpg")
    }
}

#[async_trait]
impl ImageHost for MockImageHost {
    async fn upload(&self, image_base64: &str) -> Result<String> {
        self.uploads.lock().unwrap().push(image_base64.to_string());
        if self.fail {
            return Err(RelayError::upstream(
                Upstream::ImageHost,
                "mock upload failure",
            ));
        }
        Ok(self.url.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returning_mock_records_uploads() {
        let host = MockImageHost::returning("https://images.example/a.png");

        let url = host.upload("cGF5bG9hZA==").await.unwrap();
        assert_eq!(url, "https://images.example/a.png");
        assert_eq!(host.upload_count(), 1);
        assert_eq!(host.last_upload().as_deref(), Some("cGF5bG9hZA=="));
    }

    #[tokio::test]
    async fn test_failing_mock_still_records_the_call() {
        let host = MockImageHost::failing();

        let result = host.upload("cGF5bG9hZA==").await;
        assert!(matches!(
            result,
            Err(RelayError::Upstream {
                upstream: Upstream::ImageHost,
                ..
            })
        ));
        assert_eq!(host.upload_count(), 1);
    }
}
