// src/web/handlers/file_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::errors::AppError;
use crate::services::storage_service;
use crate::state::AppState;

/// Content type for a stored design blob, derived from the extension its
/// storage key preserved. Uploads are validated to the same set.
fn content_type_for(file_name: &str) -> &'static str {
  match file_name.rsplit('.').next() {
    Some("jpg") | Some("jpeg") => "image/jpeg",
    Some("png") => "image/png",
    Some("pdf") => "application/pdf",
    _ => "application/octet-stream",
  }
}

/// Serves a stored design file, the public-URL surface of the blob store.
#[instrument(name = "handler::get_design_file", skip(app_state, path), fields(file_name = %path.as_ref()))]
pub async fn get_design_file_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let file_name = path.into_inner();

  match storage_service::read_design_file(&app_state.config, &file_name).await? {
    Some(bytes) => Ok(
      HttpResponse::Ok()
        .content_type(content_type_for(&file_name))
        .body(bytes),
    ),
    None => Err(AppError::NotFound("Design file not found.".to_string())),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn content_types_follow_extension() {
    assert_eq!(content_type_for("a.jpg"), "image/jpeg");
    assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
    assert_eq!(content_type_for("a.png"), "image/png");
    assert_eq!(content_type_for("a.pdf"), "application/pdf");
    assert_eq!(content_type_for("a.bin"), "application/octet-stream");
  }
}
