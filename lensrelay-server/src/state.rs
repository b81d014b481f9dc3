//! Application state module
//!
//! Defines shared state accessible across all request handlers. The state is
//! read-only after startup; requests share nothing else.

use std::sync::Arc;

use lensrelay_core::{ImageHost, ImgbbHost, RelayError, SerpApiLens, VisualSearch};

use crate::config::Config;

/// Application state containing shared resources.
///
/// A provider is `None` when its credential is absent from configuration;
/// the handler surfaces that per request as the configuration error rather
/// than refusing to start.
#[derive(Clone)]
pub struct AppState {
    /// Image-hosting client, present when `IMGBB_API_KEY` is set
    pub image_host: Option<Arc<dyn ImageHost>>,
    /// Reverse-search client, present when `SERPAPI_API_KEY` is set
    pub visual_search: Option<Arc<dyn VisualSearch>>,
    /// Maximum uploaded file size in bytes
    pub max_file_size: usize,
}

impl AppState {
    /// Build state from configuration, constructing a client for each
    /// credential that is present.
    pub fn from_config(config: &Config) -> lensrelay_core::Result<Self> {
        let image_host: Option<Arc<dyn ImageHost>> = match &config.imgbb_api_key {
            Some(key) => Some(Arc::new(ImgbbHost::new(key.clone())?)),
            None => None,
        };

        let visual_search: Option<Arc<dyn VisualSearch>> = match &config.serpapi_api_key {
            Some(key) => Some(Arc::new(SerpApiLens::new(key.clone())?)),
            None => None,
        };

        if image_host.is_none() || visual_search.is_none() {
            tracing::warn!("One or both API keys missing; search requests will be rejected");
        }

        Ok(Self {
            image_host,
            visual_search,
            max_file_size: config.max_file_size(),
        })
    }

    /// State with explicit providers (used by tests).
    pub fn with_providers(
        image_host: Option<Arc<dyn ImageHost>>,
        visual_search: Option<Arc<dyn VisualSearch>>,
        max_file_size: usize,
    ) -> Self {
        Self {
            image_host,
            visual_search,
            max_file_size,
        }
    }

    /// Both providers, or the configuration error.
    pub fn providers(
        &self,
    ) -> Result<(&Arc<dyn ImageHost>, &Arc<dyn VisualSearch>), RelayError> {
        match (&self.image_host, &self.visual_search) {
            (Some(host), Some(search)) => Ok((host, search)),
            _ => Err(RelayError::MissingApiKeys),
        }
    }
}
