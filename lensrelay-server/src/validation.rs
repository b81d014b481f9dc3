//! Upload validation module
//!
//! Size validation for multipart file uploads. Content type is not checked
//! here; the upstream image host is the authority on what it accepts.

use lensrelay_core::RelayError;

use crate::error::ApiError;

/// Validates the size of an uploaded file
///
/// Returns an error if the file exceeds the maximum size.
pub fn validate_file_size(size: usize, max_size: usize) -> Result<(), ApiError> {
    if size > max_size {
        let max_mb = max_size / (1024 * 1024);
        let actual_mb = size / (1024 * 1024);
        Err(RelayError::validation(format!(
            "File too large: {} MB exceeds maximum of {} MB",
            actual_mb, max_mb
        ))
        .into())
    } else {
        Ok(())
    }
}
