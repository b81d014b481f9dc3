//! Multipart form parsing helpers
//!
//! Parses the single-file `image` upload. The uploaded bytes are spooled to
//! a temporary file whose removal is tied to the parsed value's lifetime, so
//! the file cannot leak across requests no matter how the pipeline ends.

use std::io::Write;

use axum::extract::Multipart;
use lensrelay_core::RelayError;
use tempfile::NamedTempFile;

use crate::error::ApiError;
use crate::validation::validate_file_size;

/// A single uploaded image, spooled to a temporary file by the parser.
///
/// The temporary file is removed when the value is dropped, whether or not
/// later pipeline steps succeed.
pub struct UploadedImage {
    spool: NamedTempFile,
    size: usize,
    content_type: Option<String>,
    file_name: Option<String>,
}

impl UploadedImage {
    /// Parse the multipart form, taking the file under the `image` field.
    ///
    /// Unknown fields are ignored. An absent or empty `image` field is the
    /// validation error `"No image uploaded."`; a file over `max_file_size`
    /// is rejected before it is spooled.
    pub async fn from_multipart(
        multipart: &mut Multipart,
        max_file_size: usize,
    ) -> Result<Self, ApiError> {
        let mut image: Option<UploadedImage> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to parse multipart: {}", e)))?
        {
            let name = field.name().unwrap_or("").to_string();

            if name != "image" || image.is_some() {
                // Single-file contract: only the first `image` field counts.
                continue;
            }

            let content_type = field.content_type().map(|s| s.to_string());
            let file_name = field.file_name().map(|s| s.to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read image field: {}", e)))?;

            validate_file_size(data.len(), max_file_size)?;

            image = Some(Self::from_parts(&data, content_type, file_name).map_err(|e| {
                ApiError::from(RelayError::unexpected(format!(
                    "failed to spool upload: {e}"
                )))
            })?);
        }

        match image {
            Some(img) if img.size > 0 => Ok(img),
            _ => Err(RelayError::validation("No image uploaded.").into()),
        }
    }

    /// Spool raw bytes to a fresh temporary file.
    fn from_parts(
        data: &[u8],
        content_type: Option<String>,
        file_name: Option<String>,
    ) -> std::io::Result<Self> {
        let mut spool = NamedTempFile::new()?;
        spool.write_all(data)?;
        spool.flush()?;
        Ok(Self {
            spool,
            size: data.len(),
            content_type,
            file_name,
        })
    }

    /// Read the spooled bytes back.
    ///
    /// The caller drops the value once the bytes are in hand, which removes
    /// the temporary file.
    pub fn read_bytes(&self) -> Result<Vec<u8>, ApiError> {
        std::fs::read(self.spool.path()).map_err(|e| {
            ApiError::from(RelayError::unexpected(format!(
                "failed to read spooled upload: {e}"
            )))
        })
    }

    /// Uploaded size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Content-Type declared by the client for the file field, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Original filename declared by the client, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }
}
