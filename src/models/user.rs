// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An account in the auth collection. Accounts are provisioned externally;
/// this service only reads them (and trusts `is_manager` verbatim).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
  pub id: Uuid,
  pub email: String,
  #[serde(skip_serializing)] // Never send password hash to client
  pub password_hash: String,
  pub is_manager: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}
