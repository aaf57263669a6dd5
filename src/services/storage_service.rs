// src/services/storage_service.rs

//! Blob store for design files: a `designs/` prefix under the configured
//! uploads directory, with derived public URLs. Order creation treats
//! every failure here as best-effort, so nothing in this module is fatal.

use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::{AppError, Result};

pub const DESIGNS_PREFIX: &str = "designs";

/// Reference to a stored design file, as handed back to the caller.
#[derive(Debug, Clone)]
pub struct StoredDesignFile {
  pub path: String,
  pub public_url: String,
  pub original_name: String,
}

/// Collision-resistant storage key: millisecond timestamp, a random
/// suffix, and the original file extension.
fn design_file_key(original_name: &str) -> String {
  let ext = Path::new(original_name)
    .extension()
    .and_then(|e| e.to_str())
    .unwrap_or("bin")
    .to_ascii_lowercase();
  let suffix = Uuid::new_v4().simple().to_string();
  format!("{}/{}-{}.{}", DESIGNS_PREFIX, Utc::now().timestamp_millis(), &suffix[..8], ext)
}

fn public_url_for(config: &AppConfig, key: &str) -> String {
  format!("{}/files/{}", config.app_base_url.trim_end_matches('/'), key)
}

/// Absolute filesystem path backing a storage key.
fn blob_path(config: &AppConfig, key: &str) -> PathBuf {
  key.split('/').fold(config.uploads_dir.clone(), |p, part| p.join(part))
}

/// Stores one design blob and returns its {path, public URL, original
/// filename} reference.
#[instrument(name = "storage_service::store_design_file", skip(config, bytes), fields(size = bytes.len()))]
pub async fn store_design_file(config: &AppConfig, original_name: &str, bytes: &[u8]) -> Result<StoredDesignFile> {
  let key = design_file_key(original_name);
  let target = blob_path(config, &key);

  if let Some(parent) = target.parent() {
    tokio::fs::create_dir_all(parent)
      .await
      .map_err(|e| AppError::Storage(format!("Failed to prepare uploads directory: {}", e)))?;
  }

  tokio::fs::write(&target, bytes)
    .await
    .map_err(|e| AppError::Storage(format!("Failed to store design file '{}': {}", key, e)))?;

  info!(%key, "Design file stored.");
  Ok(StoredDesignFile {
    public_url: public_url_for(config, &key),
    path: key,
    original_name: original_name.to_string(),
  })
}

/// Reads a stored design blob back by its file name (the portion of the
/// key after the `designs/` prefix). `Ok(None)` when no such blob exists.
#[instrument(name = "storage_service::read_design_file", skip(config))]
pub async fn read_design_file(config: &AppConfig, file_name: &str) -> Result<Option<Vec<u8>>> {
  // Keys are single path segments under the prefix; anything else is not a
  // key this store ever issued.
  if file_name.is_empty() || file_name.contains('/') || file_name.contains("..") {
    return Ok(None);
  }

  let target = config.uploads_dir.join(DESIGNS_PREFIX).join(file_name);
  match tokio::fs::read(&target).await {
    Ok(bytes) => Ok(Some(bytes)),
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
    Err(e) => Err(AppError::Storage(format!("Failed to read design file '{}': {}", file_name, e))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Arc;

  fn test_config(uploads_dir: std::path::PathBuf) -> AppConfig {
    AppConfig {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      database_url: "postgres://unused".to_string(),
      app_base_url: "http://localhost:8080/".to_string(),
      uploads_dir,
      max_upload_mb: 5,
      session_ttl_hours: 24,
      seed_db: false,
    }
  }

  #[test]
  fn keys_carry_prefix_and_original_extension() {
    let key = design_file_key("ring-sketch.PNG");
    assert!(key.starts_with("designs/"), "unexpected key: {key}");
    assert!(key.ends_with(".png"), "unexpected key: {key}");
  }

  #[test]
  fn keys_do_not_collide() {
    let a = design_file_key("a.pdf");
    let b = design_file_key("a.pdf");
    assert_ne!(a, b);
  }

  #[test]
  fn extensionless_names_fall_back_to_bin() {
    assert!(design_file_key("sketch").ends_with(".bin"));
  }

  #[tokio::test]
  async fn store_then_read_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let config = Arc::new(test_config(dir.path().to_path_buf()));

    let stored = store_design_file(&config, "pendant.pdf", b"%PDF-1.4 test").await.unwrap();
    assert_eq!(stored.original_name, "pendant.pdf");
    assert!(stored.path.starts_with("designs/"));
    // Public URL joins without a double slash.
    assert_eq!(stored.public_url, format!("http://localhost:8080/files/{}", stored.path));

    let file_name = stored.path.strip_prefix("designs/").unwrap();
    let bytes = read_design_file(&config, file_name).await.unwrap().unwrap();
    assert_eq!(bytes, b"%PDF-1.4 test");
  }

  #[tokio::test]
  async fn read_of_missing_or_traversing_names_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path().to_path_buf());

    assert!(read_design_file(&config, "no-such-file.png").await.unwrap().is_none());
    assert!(read_design_file(&config, "../schema.sql").await.unwrap().is_none());
    assert!(read_design_file(&config, "").await.unwrap().is_none());
  }
}
