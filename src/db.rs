// src/db.rs

//! Database pool construction and optional demo seeding.

use sqlx::PgPool;
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::auth_service;

pub async fn connect(config: &AppConfig) -> Result<PgPool> {
  let pool = PgPool::connect(&config.database_url).await?;
  Ok(pool)
}

/// Seeds one demo customer and one demo manager when the users table is
/// empty. Accounts are otherwise provisioned externally; this exists so a
/// fresh database has something to sign in with.
#[instrument(name = "db::seed_demo_users", skip(pool))]
pub async fn seed_demo_users(pool: &PgPool) -> Result<()> {
  let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users").fetch_one(pool).await?;
  if user_count > 0 {
    info!("Users table already populated ({} rows); skipping seed.", user_count);
    return Ok(());
  }

  let demo_accounts = [
    ("customer@example.com", "customer123", false),
    ("manager@example.com", "manager123", true),
  ];

  for (email, password, is_manager) in demo_accounts {
    let password_hash = auth_service::hash_password(password)?;
    sqlx::query("INSERT INTO users (email, password_hash, is_manager) VALUES ($1, $2, $3)")
      .bind(email)
      .bind(&password_hash)
      .bind(is_manager)
      .execute(pool)
      .await?;
    info!(email, is_manager, "Seeded demo account.");
  }

  Ok(())
}
