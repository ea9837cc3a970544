//! Loosely-typed JSON scalar fields.
//!
//! Clients send request bodies where the same column may arrive as a string,
//! a number or a boolean (`"2019"` vs `2019`). [`Field`] captures any JSON
//! scalar and coerces it on demand into the column type. Presence follows
//! truthiness: `null`, `false`, `0` and `""` count as absent.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use thiserror::Error;

/// Coercion failure for a loosely-typed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("value is not numeric")]
    NotNumeric,

    #[error("value is not a whole number")]
    NotInteger,

    #[error("value is out of range")]
    OutOfRange,
}

/// A JSON scalar as received from a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Bool(bool),
    Number(Number),
    Text(String),
}

impl Field {
    /// Returns false for `false`, zero, NaN and the empty string.
    pub fn is_truthy(&self) -> bool {
        match self {
            Field::Bool(b) => *b,
            Field::Number(n) => n.as_f64().map(|v| v != 0.0 && !v.is_nan()).unwrap_or(true),
            Field::Text(s) => !s.is_empty(),
        }
    }

    /// Renders the value as column text.
    ///
    /// Whole floats lose their fraction (`1.0` is stored as `"1"`).
    pub fn to_text(&self) -> String {
        match self {
            Field::Bool(b) => b.to_string(),
            Field::Number(n) if n.is_f64() => {
                n.as_f64().map(|v| v.to_string()).unwrap_or_default()
            }
            Field::Number(n) => n.to_string(),
            Field::Text(s) => s.clone(),
        }
    }

    /// Coerces to a finite float.
    ///
    /// Numeric strings are trimmed before parsing and a blank string is zero.
    pub fn to_f64(&self) -> Result<f64, FieldError> {
        let value = match self {
            Field::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Field::Number(n) => n.as_f64().ok_or(FieldError::NotNumeric)?,
            Field::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().map_err(|_| FieldError::NotNumeric)?
                }
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(FieldError::NotNumeric)
        }
    }

    /// Coerces to a 32-bit integer column value.
    pub fn to_i32(&self) -> Result<i32, FieldError> {
        if let Field::Number(n) = self {
            if let Some(v) = n.as_i64() {
                return i32::try_from(v).map_err(|_| FieldError::OutOfRange);
            }
        }

        let value = self.to_f64()?;
        if value.fract() != 0.0 {
            return Err(FieldError::NotInteger);
        }
        if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
            return Err(FieldError::OutOfRange);
        }
        Ok(value as i32)
    }
}

/// Keeps the field only when it is present and truthy.
pub fn truthy(field: Option<Field>) -> Option<Field> {
    field.filter(Field::is_truthy)
}

/// Text for an optional column: absent or falsy values become NULL.
pub fn optional_text(field: Option<Field>) -> Option<String> {
    truthy(field).map(|f| f.to_text())
}
