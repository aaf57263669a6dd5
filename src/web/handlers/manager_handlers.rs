// src/web/handlers/manager_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::OrderStatus;
use crate::services::order_service;
use crate::state::AppState;
use crate::web::extractors::ManagerUser;

// --- Request DTOs ---

/// The two outcomes a review can record. `in_production` and `completed`
/// belong to the production pipeline and are not valid review decisions.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
  Approved,
  Rejected,
}

impl ReviewDecision {
  fn status(self) -> OrderStatus {
    match self {
      ReviewDecision::Approved => OrderStatus::Approved,
      ReviewDecision::Rejected => OrderStatus::Rejected,
    }
  }

  fn empty_comment_warning(self) -> &'static str {
    match self {
      ReviewDecision::Approved => "Please add a comment before approving",
      ReviewDecision::Rejected => "Please add a reason for rejection",
    }
  }

  fn success_message(self) -> &'static str {
    match self {
      ReviewDecision::Approved => "Order approved successfully!",
      ReviewDecision::Rejected => "Order rejected",
    }
  }
}

#[derive(Deserialize, Debug)]
pub struct ReviewOrderRequestPayload {
  pub decision: ReviewDecision,
  pub comment: String,
}

// --- Handler Implementations ---

#[instrument(name = "handler::list_pending_orders", skip(app_state, manager), fields(manager_id = %manager.user.id))]
pub async fn list_pending_orders_handler(
  app_state: web::Data<AppState>,
  manager: ManagerUser,
) -> Result<HttpResponse, AppError> {
  let orders = order_service::list_pending_orders(&app_state.db_pool).await?;
  info!("Fetched {} pending orders.", orders.len());

  Ok(HttpResponse::Ok().json(json!({"orders": orders})))
}

#[instrument(name = "handler::list_all_orders", skip(app_state, manager), fields(manager_id = %manager.user.id))]
pub async fn list_all_orders_handler(
  app_state: web::Data<AppState>,
  manager: ManagerUser,
) -> Result<HttpResponse, AppError> {
  let orders = order_service::list_all_orders(&app_state.db_pool).await?;
  info!("Fetched {} orders.", orders.len());

  Ok(HttpResponse::Ok().json(json!({"orders": orders})))
}

/// Records an approve/reject decision on one order. The comment is
/// required here, before the gateway is touched; an empty one is a
/// user-facing validation warning.
#[instrument(
  name = "handler::review_order",
  skip(app_state, manager, path, req_payload),
  fields(manager_id = %manager.user.id, order_id = %path.as_ref(), decision = ?req_payload.decision)
)]
pub async fn review_order_handler(
  app_state: web::Data<AppState>,
  manager: ManagerUser,
  path: web::Path<Uuid>,
  req_payload: web::Json<ReviewOrderRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();
  let payload = req_payload.into_inner();

  let comment = payload.comment.trim();
  if comment.is_empty() {
    return Err(AppError::Validation(payload.decision.empty_comment_warning().to_string()));
  }

  let updated = order_service::update_order_status(
    &app_state.db_pool,
    order_id,
    payload.decision.status(),
    comment,
    manager.user.id,
  )
  .await?;

  match updated {
    Some(order) => {
      info!("Order {} reviewed as {} by manager {}.", order.id, order.status, manager.user.id);
      Ok(HttpResponse::Ok().json(json!({
        "message": payload.decision.success_message(),
        "order": order,
      })))
    }
    None => Err(AppError::NotFound("Order not found.".to_string())),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn review_payload_deserializes_decisions() {
    let payload: ReviewOrderRequestPayload =
      serde_json::from_str(r#"{"decision":"approved","comment":"Looks great"}"#).unwrap();
    assert_eq!(payload.decision, ReviewDecision::Approved);
    assert_eq!(payload.decision.status(), OrderStatus::Approved);

    let payload: ReviewOrderRequestPayload =
      serde_json::from_str(r#"{"decision":"rejected","comment":"Budget too low"}"#).unwrap();
    assert_eq!(payload.decision.status(), OrderStatus::Rejected);
  }

  #[test]
  fn unknown_decision_is_a_deserialize_error() {
    // The production pipeline's states cannot be smuggled in as decisions.
    let result = serde_json::from_str::<ReviewOrderRequestPayload>(r#"{"decision":"completed","comment":"x"}"#);
    assert!(result.is_err());
  }
}
