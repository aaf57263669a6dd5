// src/services/auth_service.rs

//! Password hashing and server-side session management.

use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::{Session, User};

/// Hashes a plain-text password using Argon2 with a random salt.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String> {
  if password.is_empty() {
    return Err(AppError::Validation("Password cannot be empty.".to_string()));
  }

  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| AppError::Internal(format!("Password hashing process failed: {}", e)))
}

/// Verifies a plain-text password against a stored Argon2 hash. Returns
/// `Ok(false)` for a mismatch; only malformed hashes or internal failures
/// are errors.
#[instrument(name = "auth_service::verify_password", skip_all, err(Display))]
pub fn verify_password(stored_hash: &str, provided_password: &str) -> Result<bool> {
  let parsed_hash = PasswordHash::new(stored_hash)
    .map_err(|e| AppError::Internal(format!("Invalid stored password hash format: {}", e)))?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => Ok(false),
    Err(e) => Err(AppError::Internal(format!("Password verification process failed: {}", e))),
  }
}

/// Verifies credentials and issues a new session token.
///
/// The same `Auth` error covers an unknown email and a wrong password, so
/// the response does not reveal which accounts exist.
#[instrument(name = "auth_service::sign_in", skip(pool, password, session_ttl_hours), fields(email = %email))]
pub async fn sign_in(pool: &PgPool, email: &str, password: &str, session_ttl_hours: i64) -> Result<(Session, User)> {
  let user: Option<User> = sqlx::query_as(
    "SELECT id, email, password_hash, is_manager, created_at, updated_at FROM users WHERE email = $1",
  )
  .bind(email)
  .fetch_optional(pool)
  .await?;

  let user = match user {
    Some(u) => u,
    None => {
      debug!("Sign-in rejected: no account for email.");
      return Err(AppError::Auth("Invalid email or password".to_string()));
    }
  };

  if !verify_password(&user.password_hash, password)? {
    debug!("Sign-in rejected: password mismatch.");
    return Err(AppError::Auth("Invalid email or password".to_string()));
  }

  let expires_at = Utc::now() + Duration::hours(session_ttl_hours);
  let session: Session = sqlx::query_as(
    "INSERT INTO sessions (user_id, expires_at) VALUES ($1, $2) \
     RETURNING token, user_id, created_at, expires_at",
  )
  .bind(user.id)
  .bind(expires_at)
  .fetch_one(pool)
  .await?;

  Ok((session, user))
}

/// Deletes a session token. Deleting an already-absent token is not an
/// error: the end state is the same.
#[instrument(name = "auth_service::sign_out", skip(pool))]
pub async fn sign_out(pool: &PgPool, token: Uuid) -> Result<()> {
  sqlx::query("DELETE FROM sessions WHERE token = $1")
    .bind(token)
    .execute(pool)
    .await?;
  Ok(())
}

/// Resolves a session token to its user, if the session exists and has not
/// expired. `Ok(None)` means "no live session", not a failure.
#[instrument(name = "auth_service::resolve_session", skip(pool))]
pub async fn resolve_session(pool: &PgPool, token: Uuid) -> Result<Option<User>> {
  let user: Option<User> = sqlx::query_as(
    "SELECT u.id, u.email, u.password_hash, u.is_manager, u.created_at, u.updated_at \
     FROM sessions s JOIN users u ON u.id = s.user_id \
     WHERE s.token = $1 AND s.expires_at > now()",
  )
  .bind(token)
  .fetch_optional(pool)
  .await?;

  if user.is_none() {
    warn!("Session token did not resolve to a live session.");
  }
  Ok(user)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn password_round_trip_verifies() {
    let hash = hash_password("rose-gold-937").unwrap();
    assert!(verify_password(&hash, "rose-gold-937").unwrap());
    assert!(!verify_password(&hash, "rose-gold-938").unwrap());
  }

  #[test]
  fn empty_password_is_rejected() {
    assert!(matches!(hash_password(""), Err(AppError::Validation(_))));
  }

  #[test]
  fn malformed_stored_hash_is_internal_error() {
    assert!(matches!(
      verify_password("not-a-phc-string", "whatever"),
      Err(AppError::Internal(_))
    ));
  }
}
