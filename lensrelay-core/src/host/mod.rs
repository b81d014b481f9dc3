//! Image-hosting providers.
//!
//! The relay never serves image bytes itself; it hands them to an external
//! host and works with the public URL the host returns. Implementations must
//! be thread-safe (`Send + Sync`).

mod imgbb;
mod mock;

pub use imgbb::{ImgbbConfig, ImgbbHost};
pub use mock::MockImageHost;

use async_trait::async_trait;

use crate::error::Result;

/// An external service that turns an uploaded image into a public URL.
///
/// ## Example
///
/// ```no_run
/// use lensrelay_core::{ImageHost, ImgbbHost};
///
/// # async fn example() -> lensrelay_core::Result<()> {
/// let host = ImgbbHost::new("my-api-key")?;
/// let url = host.upload("aGVsbG8=").await?;
/// println!("hosted at {url}");
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload a base64-encoded image and return its public URL.
    ///
    /// The payload is consumed by a single outbound request; implementations
    /// must not retry on failure.
    async fn upload(&self, image_base64: &str) -> Result<String>;

    /// Provider identifier used in logs.
    fn name(&self) -> &'static str;
}
