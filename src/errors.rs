// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::validation::FileValidationError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Access Denied: {0}")]
  Forbidden(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Storage Error: {0}")]
  Storage(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl From<FileValidationError> for AppError {
  fn from(err: FileValidationError) -> Self {
    AppError::Validation(err.to_string())
  }
}

// Allow anyhow::Error to be converted into AppError for convenience in
// functions that use `?` on anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<sqlx::Error>() {
      return AppError::Sqlx(err.downcast::<sqlx::Error>().unwrap());
    }
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    match self {
      // User-correctable outcomes: the caller fixes the request and retries.
      AppError::Validation(m) => {
        tracing::warn!(application_error = %self, "Responding with validation error");
        HttpResponse::BadRequest().json(json!({"error": m}))
      }
      AppError::Auth(m) => {
        tracing::warn!(application_error = %self, "Responding with auth error");
        HttpResponse::Unauthorized().json(json!({"error": m}))
      }
      AppError::Forbidden(m) => {
        tracing::warn!(application_error = %self, "Responding with forbidden error");
        HttpResponse::Forbidden().json(json!({"error": m}))
      }
      AppError::NotFound(m) => {
        tracing::warn!(application_error = %self, "Responding with not-found error");
        HttpResponse::NotFound().json(json!({"error": m}))
      }
      // Collaborator failures: log the original error, return a generic body.
      AppError::Storage(m) => {
        tracing::error!(application_error = %self, "Responding with storage error");
        HttpResponse::InternalServerError().json(json!({"error": "File storage operation failed", "detail": m}))
      }
      AppError::Config(m) => {
        tracing::error!(application_error = %self, "Responding with config error");
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Sqlx(_) => {
        tracing::error!(application_error = %self, "Responding with database error");
        HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"}))
      }
      AppError::Internal(m) => {
        tracing::error!(application_error = %self, "Responding with internal error");
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::StatusCode;

  #[test]
  fn error_responses_map_to_expected_status_codes() {
    let cases = [
      (AppError::Validation("bad".into()), StatusCode::BAD_REQUEST),
      (AppError::Auth("who".into()), StatusCode::UNAUTHORIZED),
      (AppError::Forbidden("no".into()), StatusCode::FORBIDDEN),
      (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND),
      (AppError::Storage("disk".into()), StatusCode::INTERNAL_SERVER_ERROR),
      (AppError::Internal("oops".into()), StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (err, expected) in cases {
      assert_eq!(err.error_response().status(), expected, "wrong status for {err:?}");
    }
  }

  #[test]
  fn file_validation_error_becomes_validation() {
    let err: AppError = FileValidationError::TooLarge { max_size_mb: 5 }.into();
    assert!(matches!(err, AppError::Validation(_)));
  }
}
