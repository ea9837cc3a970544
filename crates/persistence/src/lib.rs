//! Persistence layer for the insurance service backend.
//!
//! This crate contains:
//! - Database connection management
//! - Storage error classification
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;

pub use error::StoreError;
