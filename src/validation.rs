// src/validation.rs

//! Design-file upload checks. Pure functions of (type, size, limit); the
//! handlers decide what to do with a rejection.

use thiserror::Error;

/// MIME types a design upload may carry. `image/jpg` is not a registered
/// type but browsers emit it, so it stays accepted.
pub const ALLOWED_DESIGN_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "application/pdf"];

pub const DEFAULT_MAX_UPLOAD_MB: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileValidationError {
  #[error("Only JPG, PNG, and PDF files are allowed")]
  UnsupportedType { content_type: String },

  #[error("File size must be less than {max_size_mb}MB")]
  TooLarge { max_size_mb: u64 },
}

/// Validates a design upload against the allowed MIME types and the
/// configured size limit (in megabytes).
pub fn validate_design_file(content_type: &str, size_bytes: u64, max_size_mb: u64) -> Result<(), FileValidationError> {
  if !ALLOWED_DESIGN_TYPES.contains(&content_type) {
    return Err(FileValidationError::UnsupportedType {
      content_type: content_type.to_string(),
    });
  }

  let max_size_bytes = max_size_mb * 1024 * 1024;
  if size_bytes > max_size_bytes {
    return Err(FileValidationError::TooLarge { max_size_mb });
  }

  Ok(())
}
