// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub app_base_url: String,

  /// Root directory of the design-file blob store.
  pub uploads_dir: PathBuf,
  /// Maximum accepted design-file size, in megabytes.
  pub max_upload_mb: u64,

  /// Lifetime of an issued session token, in hours.
  pub session_ttl_hours: i64,

  /// Seed demo accounts on startup when the users table is empty.
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;
    let app_base_url = get_env("APP_BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", server_host, server_port));

    let uploads_dir = PathBuf::from(get_env("UPLOADS_DIR").unwrap_or_else(|_| "./uploads".to_string()));
    let max_upload_mb = get_env("MAX_UPLOAD_MB")
      .unwrap_or_else(|_| "5".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid MAX_UPLOAD_MB: {}", e)))?;

    let session_ttl_hours = get_env("SESSION_TTL_HOURS")
      .unwrap_or_else(|_| "24".to_string())
      .parse::<i64>()
      .map_err(|e| AppError::Config(format!("Invalid SESSION_TTL_HOURS: {}", e)))?;

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      app_base_url,
      uploads_dir,
      max_upload_mb,
      session_ttl_hours,
      seed_db,
    })
  }
}
