//! Custom Axum extractors.
//!
//! Extractors for parsing and validating request data.

pub mod json_body;

pub use json_body::JsonBody;
