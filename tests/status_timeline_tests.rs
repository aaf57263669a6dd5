// tests/status_timeline_tests.rs

use jewellery_orders::models::{status_label, timeline_steps, OrderStatus};

const FLOW: [&str; 4] = ["requested", "approved", "in_production", "completed"];

#[test]
fn flow_statuses_render_four_ordered_steps() {
  for status in FLOW {
    let steps = timeline_steps(status);
    assert_eq!(steps.len(), 4, "wrong step count for '{status}'");
    let rendered: Vec<&str> = steps.iter().map(|s| s.status.as_str()).collect();
    assert_eq!(rendered, FLOW, "wrong step order for '{status}'");
  }
}

#[test]
fn steps_up_to_current_status_are_active() {
  for (current_index, status) in FLOW.iter().enumerate() {
    let steps = timeline_steps(status);
    for (index, step) in steps.iter().enumerate() {
      assert_eq!(
        step.active,
        index <= current_index,
        "step '{}' has wrong active flag when current status is '{status}'",
        step.status
      );
    }
  }
}

#[test]
fn rejected_renders_its_own_two_step_timeline() {
  let steps = timeline_steps("rejected");
  assert_eq!(steps.len(), 2);
  assert_eq!(steps[0].status, "requested");
  assert_eq!(steps[0].label, "Order Requested");
  assert!(steps[0].active);
  assert_eq!(steps[1].status, "rejected");
  assert_eq!(steps[1].label, "Rejected");
  assert!(steps[1].active);
}

#[test]
fn step_labels_match_display_text() {
  let steps = timeline_steps("requested");
  let labels: Vec<&str> = steps.iter().map(|s| s.label.as_str()).collect();
  assert_eq!(labels, ["Order Requested", "Approved by Manager", "In Production", "Completed"]);
}

#[test]
fn unknown_status_renders_the_flow_with_nothing_active() {
  let steps = timeline_steps("archived");
  assert_eq!(steps.len(), 4);
  assert!(steps.iter().all(|s| !s.active), "no step may be active for an unknown status");
}

#[test]
fn status_labels_are_human_readable() {
  assert_eq!(status_label("requested"), "Requested");
  assert_eq!(status_label("approved"), "Approved");
  assert_eq!(status_label("in_production"), "In Production");
  assert_eq!(status_label("completed"), "Completed");
  assert_eq!(status_label("rejected"), "Rejected");
}

#[test]
fn unknown_status_label_passes_through_raw() {
  assert_eq!(status_label("archived"), "archived");
  assert_eq!(status_label(""), "");
}

#[test]
fn enum_round_trips_through_its_wire_strings() {
  let all = [
    OrderStatus::Requested,
    OrderStatus::Approved,
    OrderStatus::Rejected,
    OrderStatus::InProduction,
    OrderStatus::Completed,
  ];
  for status in all {
    assert_eq!(status_label(status.as_str()), status.label());
    // serde and as_str agree on the wire form
    let wire = serde_json::to_value(status).unwrap();
    assert_eq!(wire, status.as_str());
  }
}
