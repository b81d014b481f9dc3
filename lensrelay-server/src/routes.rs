//! Router configuration module
//!
//! Configures all routes, middleware layers, and creates the application
//! router.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers::{health, method_not_allowed, preflight, search_handler};
use crate::openapi::openapi_json;
use crate::state::AppState;

/// Create the application router with default config (for testing)
pub fn create_router() -> Router {
    let config = Config::default();
    let state = AppState::from_config(&config)
        .expect("default config constructs no HTTP clients");
    create_router_with_state(&config, state)
}

/// Create the application router from configuration, building an upstream
/// client for each credential that is present
pub fn create_router_with_config(config: &Config) -> lensrelay_core::Result<Router> {
    let state = AppState::from_config(config)?;
    Ok(create_router_with_state(config, state))
}

/// Create the application router with explicit state
pub fn create_router_with_state(config: &Config, state: AppState) -> Router {
    // The CORS contract is fixed: any origin, POST plus preflight,
    // Content-Type, on every response regardless of outcome.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::OPTIONS, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // Transport-level cap, above the per-file cap enforced in the handler.
    let body_limit_bytes = config.body_limit_mb * 1024 * 1024;

    Router::new()
        .route(
            "/search",
            post(search_handler)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/health", get(health).fallback(method_not_allowed))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(cors)
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
