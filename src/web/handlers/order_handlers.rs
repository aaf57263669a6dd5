// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{status_label, timeline_steps, Order};
use crate::services::{order_service, order_service::NewOrder, storage_service};
use crate::state::AppState;
use crate::validation::validate_design_file;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct DesignFilePayload {
  pub file_name: String,
  pub content_type: String,
  pub data_base64: String,
}

/// Order submission payload. A `status` field in the incoming JSON is
/// ignored: submissions always start life as `requested`.
#[derive(Deserialize, Debug)]
pub struct CreateOrderRequestPayload {
  pub jewellery_type: String,
  pub material: String,
  pub budget: f64,
  pub description: String,
  pub required_date: NaiveDate,
  pub design_file: Option<DesignFilePayload>,
}

fn validate_new_order(payload: &CreateOrderRequestPayload) -> Result<(), AppError> {
  if payload.jewellery_type.trim().is_empty() {
    return Err(AppError::Validation("Jewellery type is required.".to_string()));
  }
  if payload.material.trim().is_empty() {
    return Err(AppError::Validation("Material is required.".to_string()));
  }
  if payload.description.trim().is_empty() {
    return Err(AppError::Validation("Description is required.".to_string()));
  }
  if !(payload.budget > 0.0) {
    return Err(AppError::Validation("Budget must be greater than zero.".to_string()));
  }
  if payload.required_date < Utc::now().date_naive() {
    return Err(AppError::Validation("Required date cannot be in the past.".to_string()));
  }
  Ok(())
}

/// Detail body shared by the single-order endpoints: the order plus its
/// display label and computed timeline.
fn order_detail_body(order: &Order) -> serde_json::Value {
  json!({
    "order": order,
    "statusLabel": status_label(&order.status),
    "timeline": timeline_steps(&order.status),
  })
}

// --- Handler Implementations ---

#[instrument(
  name = "handler::create_order",
  skip(app_state, auth_user, req_payload),
  fields(user_id = %auth_user.user.id, jewellery_type = %req_payload.jewellery_type)
)]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  req_payload: web::Json<CreateOrderRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();
  validate_new_order(&payload)?;

  // The design file is optional, and storing it is best-effort: a storage
  // failure downgrades to a warning and the order is created without the
  // file reference. An invalid file is still a validation error, since the
  // caller can correct it.
  let mut design_file_uploaded: Option<bool> = None;
  let mut stored_file: Option<storage_service::StoredDesignFile> = None;

  if let Some(design) = &payload.design_file {
    let bytes = BASE64
      .decode(&design.data_base64)
      .map_err(|_| AppError::Validation("Design file payload is not valid base64.".to_string()))?;
    validate_design_file(&design.content_type, bytes.len() as u64, app_state.config.max_upload_mb)?;

    match storage_service::store_design_file(&app_state.config, &design.file_name, &bytes).await {
      Ok(stored) => {
        design_file_uploaded = Some(true);
        stored_file = Some(stored);
      }
      Err(e) => {
        warn!(error = %e, "File upload failed, but order will be created without design file");
        design_file_uploaded = Some(false);
      }
    }
  }

  let new_order = NewOrder {
    jewellery_type: payload.jewellery_type,
    material: payload.material,
    budget: payload.budget,
    description: payload.description,
    required_date: payload.required_date,
    design_file_path: stored_file.as_ref().map(|f| f.path.clone()),
    design_file_name: stored_file.as_ref().map(|f| f.original_name.clone()),
  };

  let order = order_service::create_order(&app_state.db_pool, auth_user.user.id, new_order).await?;
  info!("Order {} created for user {}.", order.id, auth_user.user.id);

  Ok(HttpResponse::Created().json(json!({
    "message": "Order created successfully!",
    "order": order,
    "designFileUploaded": design_file_uploaded,
    "designFileUrl": stored_file.map(|f| f.public_url),
  })))
}

#[instrument(name = "handler::list_my_orders", skip(app_state, auth_user), fields(user_id = %auth_user.user.id))]
pub async fn list_my_orders_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let orders = order_service::list_orders_for_user(&app_state.db_pool, auth_user.user.id).await?;
  info!("Fetched {} orders for user {}.", orders.len(), auth_user.user.id);

  Ok(HttpResponse::Ok().json(json!({"orders": orders})))
}

/// The caller's most recent order: the tracking screen's fallback when it
/// is opened without an order id.
#[instrument(name = "handler::latest_order", skip(app_state, auth_user), fields(user_id = %auth_user.user.id))]
pub async fn latest_order_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let orders = order_service::list_orders_for_user(&app_state.db_pool, auth_user.user.id).await?;

  match orders.into_iter().next() {
    Some(order) => Ok(HttpResponse::Ok().json(order_detail_body(&order))),
    None => Err(AppError::NotFound("No orders found.".to_string())),
  }
}

#[instrument(
  name = "handler::get_order",
  skip(app_state, auth_user, path),
  fields(user_id = %auth_user.user.id, order_id = %path.as_ref())
)]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();
  let order = order_service::get_order(&app_state.db_pool, order_id).await?;

  // A foreign order id answers the same as a nonexistent one, so order ids
  // cannot be probed for existence.
  match order {
    Some(order) if auth_user.user.is_manager || order.user_id == auth_user.user.id => {
      Ok(HttpResponse::Ok().json(order_detail_body(&order)))
    }
    _ => Err(AppError::NotFound("Order not found.".to_string())),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Duration;

  fn base_payload() -> CreateOrderRequestPayload {
    CreateOrderRequestPayload {
      jewellery_type: "Ring".to_string(),
      material: "White Gold".to_string(),
      budget: 1200.0,
      description: "Solitaire with a 0.5ct stone".to_string(),
      required_date: Utc::now().date_naive() + Duration::days(30),
      design_file: None,
    }
  }

  #[test]
  fn status_in_payload_is_ignored() {
    // The DTO has no status field, so a client-supplied status cannot
    // reach the insert; deserialization simply drops it.
    let json = format!(
      r#"{{"jewellery_type":"Ring","material":"Gold","budget":500,"description":"plain band",
           "required_date":"{}","status":"approved"}}"#,
      Utc::now().date_naive()
    );
    let payload: CreateOrderRequestPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(payload.jewellery_type, "Ring");
    assert!(validate_new_order(&payload).is_ok());
  }

  #[test]
  fn zero_or_negative_budget_is_rejected() {
    let mut payload = base_payload();
    payload.budget = 0.0;
    assert!(matches!(validate_new_order(&payload), Err(AppError::Validation(_))));
    payload.budget = -3.5;
    assert!(matches!(validate_new_order(&payload), Err(AppError::Validation(_))));
  }

  #[test]
  fn past_required_date_is_rejected_and_today_accepted() {
    let mut payload = base_payload();
    payload.required_date = Utc::now().date_naive() - Duration::days(1);
    assert!(matches!(validate_new_order(&payload), Err(AppError::Validation(_))));
    payload.required_date = Utc::now().date_naive();
    assert!(validate_new_order(&payload).is_ok());
  }

  #[test]
  fn blank_fields_are_rejected() {
    let mut payload = base_payload();
    payload.material = "   ".to_string();
    assert!(matches!(validate_new_order(&payload), Err(AppError::Validation(_))));
  }

  #[test]
  fn detail_body_carries_label_and_timeline() {
    let order = Order {
      id: Uuid::new_v4(),
      user_id: Uuid::new_v4(),
      jewellery_type: "Necklace".to_string(),
      material: "Silver".to_string(),
      budget: 300.0,
      description: "Chain with pendant".to_string(),
      required_date: Utc::now().date_naive(),
      design_file_path: None,
      design_file_name: None,
      status: "approved".to_string(),
      manager_comment: Some("Looks great".to_string()),
      manager_id: Some(Uuid::new_v4()),
      created_at: Utc::now(),
      updated_at: Utc::now(),
    };

    let body = order_detail_body(&order);
    assert_eq!(body["statusLabel"], "Approved");
    let timeline = body["timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), 4);
    assert_eq!(timeline[1]["active"], true);
    assert_eq!(timeline[2]["active"], false);
  }
}
