// src/web/extractors.rs

//! Request guards. `AuthenticatedUser` resolves the bearer token to a live
//! session; `ManagerUser` additionally requires the manager role. Both
//! trust the stored role claim verbatim.

use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::User;
use crate::services::auth_service;
use crate::state::AppState;

/// Pulls the opaque session token out of the `Authorization: Bearer ...`
/// header.
fn bearer_token(req: &HttpRequest) -> Option<String> {
  req
    .headers()
    .get("Authorization")?
    .to_str()
    .ok()?
    .strip_prefix("Bearer ")
    .map(|t| t.trim().to_string())
}

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
  pub user: User,
  pub token: Uuid,
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let state = req.app_data::<web::Data<AppState>>().cloned();
    let token = bearer_token(req);

    Box::pin(async move {
      let state = state.ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))?;
      let token = token.ok_or_else(|| {
        warn!("AuthenticatedUser extractor: missing bearer token.");
        AppError::Auth("Authentication required.".to_string())
      })?;
      let token = Uuid::parse_str(&token).map_err(|_| {
        warn!("AuthenticatedUser extractor: malformed session token.");
        AppError::Auth("Invalid session token.".to_string())
      })?;

      match auth_service::resolve_session(&state.db_pool, token).await? {
        Some(user) => Ok(AuthenticatedUser { user, token }),
        None => Err(AppError::Auth("Session expired or not found.".to_string())),
      }
    })
  }
}

/// An authenticated user who also holds the manager role.
#[derive(Debug, Clone)]
pub struct ManagerUser {
  pub user: User,
}

impl FromRequest for ManagerUser {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, payload: &mut actix_web::dev::Payload) -> Self::Future {
    let auth_future = AuthenticatedUser::from_request(req, payload);

    Box::pin(async move {
      let auth = auth_future.await?;
      if !auth.user.is_manager {
        warn!(user_id = %auth.user.id, "Manager route denied for non-manager user.");
        return Err(AppError::Forbidden("Access denied. Manager role required.".to_string()));
      }
      Ok(ManagerUser { user: auth.user })
    })
  }
}
