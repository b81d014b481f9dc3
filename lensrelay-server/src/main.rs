//! Lensrelay Server - HTTP relay for reverse image search
//!
//! Exposes a single upload endpoint:
//! - POST /search - host an uploaded image and relay the visual matches

use lensrelay_server::{create_router_with_config, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("lensrelay_server=info,lensrelay_core=info,tower_http=info")
        }))
        .init();

    let config = Config::from_env();
    let addr = config.socket_addr();

    let app = match create_router_with_config(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build application");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "Listening");
    tracing::info!("  POST /search - reverse image search (multipart: image)");
    tracing::info!("  GET  /health - health check");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
