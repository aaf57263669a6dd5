// src/lib.rs

//! Order service for custom jewellery requests: customers submit orders
//! with an optional design file, track their progress, and managers review
//! pending requests. One actix-web binary owns the order collection, the
//! design-file blob store, and session authentication.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod validation;
pub mod web;
