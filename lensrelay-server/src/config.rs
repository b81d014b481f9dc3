//! Server configuration module
//!
//! Handles loading configuration from environment variables with sensible
//! defaults. The struct is constructed once at process start and passed
//! explicitly into the router; there is no reload mechanism.

use std::net::SocketAddr;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port (default: 3000)
    pub port: u16,
    /// Server host (default: 127.0.0.1)
    pub host: [u8; 4],
    /// Request body limit in MB (default: 40)
    pub body_limit_mb: usize,
    /// Maximum uploaded file size in MB (default: 32)
    pub max_file_size_mb: usize,
    /// Image-host credential (`IMGBB_API_KEY`); checked per request
    pub imgbb_api_key: Option<String>,
    /// Search-provider credential (`SERPAPI_API_KEY`); checked per request
    pub serpapi_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            host: [127, 0, 0, 1],
            body_limit_mb: 40,
            max_file_size_mb: 32,
            imgbb_api_key: None,
            serpapi_api_key: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let host = std::env::var("HOST")
            .ok()
            .map(|h| {
                if h == "0.0.0.0" {
                    [0, 0, 0, 0]
                } else {
                    [127, 0, 0, 1]
                }
            })
            .unwrap_or([127, 0, 0, 1]);

        let body_limit_mb = std::env::var("BODY_LIMIT_MB")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(40);

        let max_file_size_mb = std::env::var("MAX_FILE_SIZE_MB")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(32);

        let imgbb_api_key = std::env::var("IMGBB_API_KEY").ok().filter(|k| !k.is_empty());

        let serpapi_api_key = std::env::var("SERPAPI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        Self {
            port,
            host,
            body_limit_mb,
            max_file_size_mb,
            imgbb_api_key,
            serpapi_api_key,
        }
    }

    /// Maximum uploaded file size in bytes
    pub fn max_file_size(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }

    /// Get socket address from config
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_file_size_mb, 32);
        assert!(config.body_limit_mb > config.max_file_size_mb);
        assert!(config.imgbb_api_key.is_none());
        assert!(config.serpapi_api_key.is_none());
    }

    #[test]
    fn test_max_file_size_in_bytes() {
        let config = Config::default();
        assert_eq!(config.max_file_size(), 32 * 1024 * 1024);
    }

    #[test]
    fn test_socket_addr() {
        let config = Config::default();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }
}
