// src/models/mod.rs

//! Data structures representing database entities.

pub mod order;
pub mod session;
pub mod user;

pub use order::{timeline_steps, status_label, Order, OrderStatus, TimelineStep};
pub use session::Session;
pub use user::User;
