//! API error handling module
//!
//! A single boundary turns every failure raised between the precondition
//! checks and the end of the relay pipeline into the wire contract: HTTP 400
//! with a JSON `{"error": ...}` body. Only the method check (405) and the
//! preflight response sit outside it. The internal taxonomy survives in the
//! logs, not in the status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lensrelay_core::RelayError;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Wrong HTTP verb
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The request body could not be parsed as the expected multipart form
    #[error("{0}")]
    BadRequest(String),

    /// Failure from the relay pipeline: configuration, validation, upstream,
    /// or unexpected
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ApiError {
    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            // Everything else is a uniform 400; the wire contract does not
            // distinguish client-caused from server-caused failures.
            Self::BadRequest(_) | Self::Relay(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error category for logging
    fn error_category(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed => "method",
            Self::BadRequest(_) => "bad_request",
            Self::Relay(RelayError::MissingApiKeys) => "config",
            Self::Relay(RelayError::Validation(_)) => "validation",
            Self::Relay(RelayError::Upstream { .. }) => "upstream",
            Self::Relay(RelayError::Unexpected(_)) => "unexpected",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let category = self.error_category();
        let message = self.to_string();

        // Upstream and unexpected failures are server-side surprises; the
        // rest are client mistakes.
        match &self {
            Self::Relay(RelayError::Upstream { .. }) | Self::Relay(RelayError::Unexpected(_)) => {
                tracing::error!(
                    status = %status,
                    category = category,
                    error = %message,
                    "Request failed"
                );
            }
            _ => {
                tracing::warn!(
                    status = %status,
                    category = category,
                    error = %message,
                    "Request rejected"
                );
            }
        }

        let body = serde_json::json!({
            "error": message,
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lensrelay_core::Upstream;

    #[test]
    fn test_method_not_allowed_is_405() {
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_all_relay_variants_are_400() {
        let errors = [
            ApiError::from(RelayError::MissingApiKeys),
            ApiError::from(RelayError::validation("No image uploaded.")),
            ApiError::from(RelayError::upstream(Upstream::ImageHost, "status 500")),
            ApiError::from(RelayError::upstream(Upstream::VisualSearch, "timeout")),
            ApiError::from(RelayError::unexpected("boom")),
            ApiError::bad_request("Failed to parse multipart: eof"),
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_relay_message_is_transparent() {
        let err = ApiError::from(RelayError::MissingApiKeys);
        assert_eq!(
            err.to_string(),
            "Missing API keys. Please check environment variables."
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(ApiError::MethodNotAllowed.error_category(), "method");
        assert_eq!(
            ApiError::from(RelayError::MissingApiKeys).error_category(),
            "config"
        );
        assert_eq!(
            ApiError::from(RelayError::validation("x")).error_category(),
            "validation"
        );
        assert_eq!(
            ApiError::from(RelayError::upstream(Upstream::ImageHost, "x")).error_category(),
            "upstream"
        );
    }
}
