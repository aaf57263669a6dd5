// src/services/mod.rs

//! Gateway layer: the only code that talks to the database pool and the
//! blob store. Collaborator failures propagate unchanged as `AppError`.

pub mod auth_service;
pub mod order_service;
pub mod storage_service;
