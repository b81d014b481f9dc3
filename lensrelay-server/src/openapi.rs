//! OpenAPI documentation configuration
//!
//! Generates the OpenAPI 3.0 specification for the relay API and serves it
//! as JSON.

use axum::Json;
use utoipa::OpenApi;

use crate::handlers::HealthResponse;

/// Lensrelay API - OpenAPI Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lensrelay",
        version = "0.1.0",
        description = r#"
## Reverse Image Search Relay

Upload an image and get back the raw visual-matches document from the
reverse-image-search provider.

1. `POST /search` with a multipart `image` field
2. The image is pushed to the configured image host for a public URL
3. The URL is queried against the search provider
4. The provider's JSON document is relayed back unmodified
"#,
        license(name = "MIT OR Apache-2.0")
    ),
    tags(
        (name = "Search", description = "Reverse image search"),
        (name = "Health", description = "Service health endpoints")
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::search::search_handler,
    ),
    components(schemas(HealthResponse))
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json - serve the generated document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/search"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
