// src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::auth_service;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct SigninRequestPayload {
  pub email: String,
  pub password: String,
}

// --- Handler Implementations ---

#[instrument(
  name = "handler::signin",
  skip(app_state, req_payload),
  fields(req_email = %req_payload.email)
)]
pub async fn signin_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SigninRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Signin attempt for email: {}", req_payload.email);

  let (session, user) = auth_service::sign_in(
    &app_state.db_pool,
    &req_payload.email,
    &req_payload.password,
    app_state.config.session_ttl_hours,
  )
  .await?;

  info!("Signin successful for email: {}. User ID: {}", user.email, user.id);

  Ok(HttpResponse::Ok().json(json!({
    "message": "Signin successful.",
    "token": session.token,
    "expiresAt": session.expires_at,
    "user": user,
  })))
}

#[instrument(name = "handler::signout", skip(app_state, auth_user), fields(user_id = %auth_user.user.id))]
pub async fn signout_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  auth_service::sign_out(&app_state.db_pool, auth_user.token).await?;
  info!("User {} signed out.", auth_user.user.id);

  Ok(HttpResponse::Ok().json(json!({"message": "Signed out."})))
}

/// The signed-in user, with the role flag the page surface uses to choose
/// between the customer and manager dashboards.
#[instrument(name = "handler::me", skip(auth_user), fields(user_id = %auth_user.user.id))]
pub async fn me_handler(auth_user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(json!({"user": auth_user.user})))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn signin_payload_deserializes() {
    let payload: SigninRequestPayload =
      serde_json::from_str(r#"{"email":"a@b.c","password":"pw"}"#).unwrap();
    assert_eq!(payload.email, "a@b.c");
    assert_eq!(payload.password, "pw");
  }
}
