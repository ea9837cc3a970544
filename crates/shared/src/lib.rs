//! Shared utilities for the insurance service backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Loosely-typed JSON field coercion
//! - Common validation logic

pub mod field;
pub mod validation;

pub use field::{Field, FieldError};
