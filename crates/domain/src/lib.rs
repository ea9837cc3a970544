//! Domain layer for the insurance service backend.
//!
//! This crate contains:
//! - Domain models (users, catalog entries, service requests)
//! - Request payloads and their validation
//! - Domain error types

pub mod error;
pub mod models;

pub use error::InputError;
