// src/services/order_service.rs

//! CRUD over the `custom_jewellery_orders` collection. Every list reads
//! newest-first; single-row lookups return `Ok(None)` when the row is
//! absent rather than treating that as an error.

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::{Order, OrderStatus};

const ORDER_COLUMNS: &str = "id, user_id, jewellery_type, material, budget, description, required_date, \
   design_file_path, design_file_name, status, manager_comment, manager_id, created_at, updated_at";

/// Input for a new order. There is intentionally no status field: the
/// insert always stores `requested`, whatever the client sent.
#[derive(Debug, Clone)]
pub struct NewOrder {
  pub jewellery_type: String,
  pub material: String,
  pub budget: f64,
  pub description: String,
  pub required_date: chrono::NaiveDate,
  pub design_file_path: Option<String>,
  pub design_file_name: Option<String>,
}

/// Inserts one order for `user_id` and returns the stored row, including
/// the generated id and timestamps.
#[instrument(name = "order_service::create_order", skip(pool, order), fields(user_id = %user_id))]
pub async fn create_order(pool: &PgPool, user_id: Uuid, order: NewOrder) -> Result<Order> {
  let created: Order = sqlx::query_as(&format!(
    "INSERT INTO custom_jewellery_orders \
       (user_id, jewellery_type, material, budget, description, required_date, \
        design_file_path, design_file_name, status) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'requested') \
     RETURNING {ORDER_COLUMNS}"
  ))
  .bind(user_id)
  .bind(&order.jewellery_type)
  .bind(&order.material)
  .bind(order.budget)
  .bind(&order.description)
  .bind(order.required_date)
  .bind(&order.design_file_path)
  .bind(&order.design_file_name)
  .fetch_one(pool)
  .await?;

  Ok(created)
}

/// All orders belonging to `user_id`, newest first.
#[instrument(name = "order_service::list_orders_for_user", skip(pool), fields(user_id = %user_id))]
pub async fn list_orders_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Order>> {
  let orders: Vec<Order> = sqlx::query_as(&format!(
    "SELECT {ORDER_COLUMNS} FROM custom_jewellery_orders WHERE user_id = $1 ORDER BY created_at DESC"
  ))
  .bind(user_id)
  .fetch_all(pool)
  .await?;

  Ok(orders)
}

/// One order by id, or `None` when absent.
#[instrument(name = "order_service::get_order", skip(pool))]
pub async fn get_order(pool: &PgPool, order_id: Uuid) -> Result<Option<Order>> {
  let order: Option<Order> = sqlx::query_as(&format!(
    "SELECT {ORDER_COLUMNS} FROM custom_jewellery_orders WHERE id = $1"
  ))
  .bind(order_id)
  .fetch_optional(pool)
  .await?;

  Ok(order)
}

/// Orders still awaiting review, newest first.
#[instrument(name = "order_service::list_pending_orders", skip(pool))]
pub async fn list_pending_orders(pool: &PgPool) -> Result<Vec<Order>> {
  let orders: Vec<Order> = sqlx::query_as(&format!(
    "SELECT {ORDER_COLUMNS} FROM custom_jewellery_orders WHERE status = $1 ORDER BY created_at DESC"
  ))
  .bind(OrderStatus::Requested.as_str())
  .fetch_all(pool)
  .await?;

  Ok(orders)
}

/// Every order in the collection, newest first.
#[instrument(name = "order_service::list_all_orders", skip(pool))]
pub async fn list_all_orders(pool: &PgPool) -> Result<Vec<Order>> {
  let orders: Vec<Order> = sqlx::query_as(&format!(
    "SELECT {ORDER_COLUMNS} FROM custom_jewellery_orders ORDER BY created_at DESC"
  ))
  .fetch_all(pool)
  .await?;

  Ok(orders)
}

/// Records a review outcome: status, manager comment, and reviewing
/// manager are written together, and `updated_at` is bumped. Returns the
/// updated row, or `None` when the order does not exist. The caller is
/// responsible for requiring a non-empty comment.
#[instrument(
  name = "order_service::update_order_status",
  skip(pool, comment),
  fields(status = status.as_str(), manager_id = %manager_id)
)]
pub async fn update_order_status(
  pool: &PgPool,
  order_id: Uuid,
  status: OrderStatus,
  comment: &str,
  manager_id: Uuid,
) -> Result<Option<Order>> {
  let updated: Option<Order> = sqlx::query_as(&format!(
    "UPDATE custom_jewellery_orders \
     SET status = $2, manager_comment = $3, manager_id = $4, updated_at = now() \
     WHERE id = $1 \
     RETURNING {ORDER_COLUMNS}"
  ))
  .bind(order_id)
  .bind(status.as_str())
  .bind(comment)
  .bind(manager_id)
  .fetch_optional(pool)
  .await?;

  Ok(updated)
}
