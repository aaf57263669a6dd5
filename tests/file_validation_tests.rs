// tests/file_validation_tests.rs

use jewellery_orders::validation::{validate_design_file, FileValidationError, DEFAULT_MAX_UPLOAD_MB};

const MB: u64 = 1024 * 1024;

#[test]
fn text_files_are_rejected_regardless_of_size() {
  let err = validate_design_file("text/plain", 10, DEFAULT_MAX_UPLOAD_MB).unwrap_err();
  assert!(matches!(err, FileValidationError::UnsupportedType { .. }));
  // The rejection names the allowed types.
  let message = err.to_string();
  assert!(message.contains("JPG"), "message was: {message}");
  assert!(message.contains("PNG"), "message was: {message}");
  assert!(message.contains("PDF"), "message was: {message}");
}

#[test]
fn oversized_files_are_rejected_with_the_configured_limit() {
  let err = validate_design_file("image/png", 6 * MB, 5).unwrap_err();
  assert_eq!(err, FileValidationError::TooLarge { max_size_mb: 5 });
  assert!(err.to_string().contains("5MB"));
}

#[test]
fn a_four_mb_png_is_accepted() {
  assert!(validate_design_file("image/png", 4 * MB, 5).is_ok());
}

#[test]
fn size_exactly_at_the_limit_is_accepted() {
  assert!(validate_design_file("application/pdf", 5 * MB, 5).is_ok());
  assert!(validate_design_file("application/pdf", 5 * MB + 1, 5).is_err());
}

#[test]
fn every_allowed_type_is_accepted() {
  for content_type in ["image/jpeg", "image/jpg", "image/png", "application/pdf"] {
    assert!(
      validate_design_file(content_type, MB, DEFAULT_MAX_UPLOAD_MB).is_ok(),
      "'{content_type}' should be accepted"
    );
  }
}

#[test]
fn the_limit_is_configurable() {
  // A 6 MB file passes a 10 MB limit but not the default.
  assert!(validate_design_file("image/jpeg", 6 * MB, 10).is_ok());
  assert!(validate_design_file("image/jpeg", 6 * MB, DEFAULT_MAX_UPLOAD_MB).is_err());
}
