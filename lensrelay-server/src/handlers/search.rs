//! Reverse image search handler
//!
//! Handles POST /search requests: a single-file multipart upload is hosted
//! via the image host, the hosted URL is queried against the search
//! provider, and the provider's document is relayed back unmodified.

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use lensrelay_core::reverse_search;
use tracing::warn;

use crate::error::ApiError;
use crate::multipart::UploadedImage;
use crate::state::AppState;

/// Run a reverse image search for an uploaded image
///
/// Accepts multipart/form-data with:
/// - **image** (required): the image file to search for (max 32MB)
///
/// On success the response body is the search provider's raw JSON document;
/// its shape is owned by the provider, not by this service. Every failure
/// (missing credentials, missing/oversized file, upstream error) is a 400
/// with a JSON `{"error": ...}` body.
#[utoipa::path(
    post,
    path = "/search",
    tag = "Search",
    responses(
        (status = 200, description = "Raw visual-matches document from the search provider"),
        (status = 400, description = "Validation, configuration, or upstream failure"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn search_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    // Credentials are checked before the body is parsed.
    let (host, search) = state.providers()?;

    let upload = UploadedImage::from_multipart(&mut multipart, state.max_file_size).await?;

    if let Some(content_type) = upload.content_type() {
        if !content_type.to_lowercase().starts_with("image/") {
            // Not enforced; the upstream host is the authority on formats.
            warn!(
                content_type,
                "Upload not declared as an image; forwarding unchanged"
            );
        }
    }

    let content = upload.read_bytes()?;
    // Bytes are in hand; release the temporary file before the slow part.
    drop(upload);

    let document = reverse_search(&content, host.as_ref(), search.as_ref()).await?;

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        document.into_string(),
    )
        .into_response())
}

/// OPTIONS handler for CORS preflight.
///
/// Always 204 with an empty body; the CORS layer attaches the allow headers.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Fallback for verbs other than POST and OPTIONS.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
