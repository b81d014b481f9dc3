//! Lensrelay Core - reverse-image-search relay pipeline
//!
//! This crate provides the request-scoped pipeline behind the relay service:
//! uploaded image bytes are base64-encoded, handed to an external image host
//! for a public URL, and that URL is forwarded to an external reverse-image
//! search provider whose result document is relayed back verbatim.
//!
//! Both collaborators sit behind traits ([`ImageHost`], [`VisualSearch`]) so
//! the HTTP layer and the tests can swap in deterministic mocks.
//!
//! # Example
//!
//! ```no_run
//! use lensrelay_core::{reverse_search, ImgbbHost, SerpApiLens};
//!
//! # async fn example() -> lensrelay_core::Result<()> {
//! let host = ImgbbHost::new("imgbb-key")?;
//! let search = SerpApiLens::new("serpapi-key")?;
//!
//! let document = reverse_search(b"...image bytes...", &host, &search).await?;
//! println!("{}", document.as_str());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod host;
pub mod relay;
pub mod search;

// Re-export main types for convenience
pub use error::{RelayError, Result, Upstream};
pub use host::{ImageHost, ImgbbConfig, ImgbbHost, MockImageHost};
pub use relay::reverse_search;
pub use search::{MockVisualSearch, SearchDocument, SerpApiConfig, SerpApiLens, VisualSearch};
