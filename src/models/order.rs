// src/models/order.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle stage of an order.
///
/// `Requested` is the initial state; a manager review moves it to
/// `Approved` or `Rejected`. `InProduction` and `Completed` are written by
/// the external production pipeline; no operation of this service sets
/// them, but the display contract below must render them. The database
/// column is plain text, so helpers that feed the display layer take the
/// raw status string and tolerate values outside this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
  Requested,
  Approved,
  Rejected,
  InProduction,
  Completed,
}

impl OrderStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Requested => "requested",
      OrderStatus::Approved => "approved",
      OrderStatus::Rejected => "rejected",
      OrderStatus::InProduction => "in_production",
      OrderStatus::Completed => "completed",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      OrderStatus::Requested => "Requested",
      OrderStatus::Approved => "Approved",
      OrderStatus::Rejected => "Rejected",
      OrderStatus::InProduction => "In Production",
      OrderStatus::Completed => "Completed",
    }
  }
}

/// The linear progression every non-rejected order moves through.
const STATUS_FLOW: [OrderStatus; 4] = [
  OrderStatus::Requested,
  OrderStatus::Approved,
  OrderStatus::InProduction,
  OrderStatus::Completed,
];

/// Human-readable label for a raw status string. Unknown values pass
/// through unchanged so externally-written statuses still render.
pub fn status_label(status: &str) -> String {
  STATUS_FLOW
    .iter()
    .chain(std::iter::once(&OrderStatus::Rejected))
    .find(|s| s.as_str() == status)
    .map(|s| s.label().to_string())
    .unwrap_or_else(|| status.to_string())
}

/// One entry of the order-progress timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineStep {
  pub status: String,
  pub label: String,
  pub active: bool,
}

impl TimelineStep {
  fn new(status: &str, label: &str, active: bool) -> Self {
    Self {
      status: status.to_string(),
      label: label.to_string(),
      active,
    }
  }
}

/// Timeline for a raw status string.
///
/// `rejected` has its own two-step display, both entries active. Every
/// other status renders the fixed four-step flow with each step up to and
/// including the current one active. A status with no position in the flow
/// activates nothing.
pub fn timeline_steps(status: &str) -> Vec<TimelineStep> {
  if status == OrderStatus::Rejected.as_str() {
    return vec![
      TimelineStep::new("requested", "Order Requested", true),
      TimelineStep::new("rejected", "Rejected", true),
    ];
  }

  let step_labels = [
    "Order Requested",
    "Approved by Manager",
    "In Production",
    "Completed",
  ];
  let current = STATUS_FLOW.iter().position(|s| s.as_str() == status);

  STATUS_FLOW
    .iter()
    .zip(step_labels)
    .enumerate()
    .map(|(index, (step, label))| {
      TimelineStep::new(step.as_str(), label, current.is_some_and(|c| index <= c))
    })
    .collect()
}

/// A customer's custom jewellery request.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: Uuid,
  pub user_id: Uuid,
  pub jewellery_type: String,
  pub material: String,
  pub budget: f64,
  pub description: String,
  pub required_date: NaiveDate,
  pub design_file_path: Option<String>,
  pub design_file_name: Option<String>,
  pub status: String,
  pub manager_comment: Option<String>,
  pub manager_id: Option<Uuid>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}
