//! The relay pipeline: encode, host, search.
//!
//! A strictly sequential chain of the two external calls. Each step blocks
//! on the previous one succeeding; a failure anywhere is terminal for the
//! request and is never retried here.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::{debug, info};

use crate::error::{RelayError, Result};
use crate::host::ImageHost;
use crate::search::{SearchDocument, VisualSearch};

/// Forward image bytes through the hosting and search collaborators.
///
/// Encodes `content` as base64, uploads the payload to `host` to obtain a
/// public URL, then runs a reverse image search for that URL. The hosted URL
/// is passed to the search provider unmodified, and the resulting document
/// is returned untouched.
pub async fn reverse_search<H, S>(content: &[u8], host: &H, search: &S) -> Result<SearchDocument>
where
    H: ImageHost + ?Sized,
    S: VisualSearch + ?Sized,
{
    if content.is_empty() {
        return Err(RelayError::validation("No image uploaded."));
    }

    let encoded = BASE64.encode(content);
    debug!(
        bytes = content.len(),
        encoded_len = encoded.len(),
        "Encoded upload payload"
    );

    let image_url = host.upload(&encoded).await?;
    info!(image_url = %image_url, provider = host.name(), "Image hosted, running reverse search");

    search.lookup(&image_url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockImageHost;
    use crate::search::{MockVisualSearch, SAMPLE_DOCUMENT};

    #[tokio::test]
    async fn test_success_relays_document_verbatim() {
        let host = MockImageHost::returning("https://images.example/cat.jpg");
        let search = MockVisualSearch::default();

        let doc = reverse_search(b"fake image bytes", &host, &search)
            .await
            .unwrap();

        assert_eq!(doc.as_str(), SAMPLE_DOCUMENT);
    }

    #[tokio::test]
    async fn test_search_receives_hosted_url_exactly_once() {
        let host = MockImageHost::returning("https://images.example/cat.jpg");
        let search = MockVisualSearch::default();

        reverse_search(b"fake image bytes", &host, &search)
            .await
            .unwrap();

        assert_eq!(host.upload_count(), 1);
        assert_eq!(search.lookup_count(), 1);
        assert_eq!(
            search.last_lookup().as_deref(),
            Some("https://images.example/cat.jpg")
        );
    }

    #[tokio::test]
    async fn test_upload_payload_is_base64_of_content() {
        let host = MockImageHost::default();
        let search = MockVisualSearch::default();

        reverse_search(b"hello", &host, &search).await.unwrap();

        assert_eq!(host.last_upload().as_deref(), Some("aGVsbG8="));
    }

    #[tokio::test]
    async fn test_upload_failure_skips_search() {
        let host = MockImageHost::failing();
        let search = MockVisualSearch::default();

        let result = reverse_search(b"fake image bytes", &host, &search).await;

        assert!(matches!(result, Err(RelayError::Upstream { .. })));
        assert_eq!(search.lookup_count(), 0, "search must not run after a failed upload");
    }

    #[tokio::test]
    async fn test_search_failure_propagates() {
        let host = MockImageHost::default();
        let search = MockVisualSearch::failing();

        let result = reverse_search(b"fake image bytes", &host, &search).await;

        assert!(matches!(result, Err(RelayError::Upstream { .. })));
        assert_eq!(host.upload_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_content_is_rejected_before_upload() {
        let host = MockImageHost::default();
        let search = MockVisualSearch::default();

        let result = reverse_search(b"", &host, &search).await;

        match result {
            Err(RelayError::Validation(msg)) => assert_eq!(msg, "No image uploaded."),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(host.upload_count(), 0);
        assert_eq!(search.lookup_count(), 0);
    }

    #[tokio::test]
    async fn test_dyn_trait_objects_are_accepted() {
        let host: Box<dyn ImageHost> = Box::new(MockImageHost::default());
        let search: Box<dyn VisualSearch> = Box::new(MockVisualSearch::default());

        let doc = reverse_search(b"fake image bytes", host.as_ref(), search.as_ref())
            .await
            .unwrap();
        assert_eq!(doc.as_str(), SAMPLE_DOCUMENT);
    }
}
