use std::fmt;

use thiserror::Error;

/// Identifies which external collaborator produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    /// The image-hosting service that turns uploaded bytes into a public URL.
    ImageHost,
    /// The reverse-image-search service queried with the hosted URL.
    VisualSearch,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageHost => write!(f, "image host"),
            Self::VisualSearch => write!(f, "visual search"),
        }
    }
}

/// Relay error taxonomy.
///
/// The HTTP layer collapses every variant except the method check to a single
/// 400 response; the variants exist so logging and tests can tell the failure
/// classes apart.
#[derive(Error, Debug)]
pub enum RelayError {
    /// A required credential is absent from process configuration.
    #[error("Missing API keys. Please check environment variables.")]
    MissingApiKeys,

    /// The request payload failed a precondition (missing/empty/oversized file).
    #[error("{0}")]
    Validation(String),

    /// An external service call failed: network error, non-success status, or
    /// a response missing the expected field.
    #[error("{upstream} error: {message}")]
    Upstream {
        upstream: Upstream,
        message: String,
    },

    /// Anything that escaped the categories above.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl RelayError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an upstream error attributed to `upstream`.
    pub fn upstream(upstream: Upstream, message: impl Into<String>) -> Self {
        Self::Upstream {
            upstream,
            message: message.into(),
        }
    }

    /// Create an unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
