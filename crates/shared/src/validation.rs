//! Common validation utilities.
//!
//! The `validate_*` functions are `custom` validators for loosely-typed
//! [`Field`] payload members. A field is present when it is truthy.

use validator::ValidationError;

use crate::field::Field;

/// Canonical form of an email address for storage and lookup.
///
/// Accounts are matched case-insensitively, so every email is lower-cased
/// before it reaches the database.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

/// Parses a numeric path segment into a row id.
///
/// Accepts the same spellings as body fields (`"7"`, `" 7 "`, `"7.0"`).
/// Returns `None` when the segment cannot name a row.
pub fn parse_row_id(raw: &str) -> Option<i32> {
    Field::Text(raw.to_string()).to_i32().ok()
}

fn missing() -> ValidationError {
    let mut err = ValidationError::new("missing");
    err.message = Some("Field is required".into());
    err
}

/// Rejects `false`, `0` and `""`.
pub fn validate_present(field: &Field) -> Result<(), ValidationError> {
    if field.is_truthy() {
        Ok(())
    } else {
        Err(missing())
    }
}

/// A present value that coerces to a 32-bit integer.
pub fn validate_integer(field: &Field) -> Result<(), ValidationError> {
    validate_present(field)?;
    validate_optional_integer(field)
}

/// Like [`validate_integer`], but a falsy value is accepted as absent.
pub fn validate_optional_integer(field: &Field) -> Result<(), ValidationError> {
    if !field.is_truthy() {
        return Ok(());
    }
    field.to_i32().map(|_| ()).map_err(|e| {
        let mut err = ValidationError::new("not_integer");
        err.message = Some(e.to_string().into());
        err
    })
}

/// Any value that coerces to a finite number. Zero is accepted.
pub fn validate_number(field: &Field) -> Result<(), ValidationError> {
    field.to_f64().map(|_| ()).map_err(|e| {
        let mut err = ValidationError::new("not_numeric");
        err.message = Some(e.to_string().into());
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(value: serde_json::Value) -> Field {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("Foo@Bar.com"), "foo@bar.com");
        assert_eq!(normalize_email("foo@bar.com"), "foo@bar.com");
        assert_eq!(normalize_email("ÄDMIN@EXAMPLE.COM"), "ädmin@example.com");
    }

    #[test]
    fn test_parse_row_id() {
        assert_eq!(parse_row_id("42"), Some(42));
        assert_eq!(parse_row_id(" 42 "), Some(42));
        assert_eq!(parse_row_id("42.0"), Some(42));
        assert_eq!(parse_row_id("abc"), None);
        assert_eq!(parse_row_id("4.2"), None);
        assert_eq!(parse_row_id("99999999999"), None);
    }

    #[test]
    fn test_validate_present() {
        assert!(validate_present(&field(json!("x"))).is_ok());
        assert!(validate_present(&field(json!(true))).is_ok());
        let err = validate_present(&field(json!(""))).unwrap_err();
        assert_eq!(err.code, "missing");
        assert!(validate_present(&field(json!(0))).is_err());
        assert!(validate_present(&field(json!(false))).is_err());
    }

    #[test]
    fn test_validate_integer() {
        assert!(validate_integer(&field(json!(2019))).is_ok());
        assert!(validate_integer(&field(json!("2019"))).is_ok());
        assert_eq!(validate_integer(&field(json!(0))).unwrap_err().code, "missing");
        assert_eq!(
            validate_integer(&field(json!("twenty"))).unwrap_err().code,
            "not_integer"
        );
        assert!(validate_integer(&field(json!(7.5))).is_err());
    }

    #[test]
    fn test_validate_optional_integer() {
        assert!(validate_optional_integer(&field(json!(0))).is_ok());
        assert!(validate_optional_integer(&field(json!(""))).is_ok());
        assert!(validate_optional_integer(&field(json!("3"))).is_ok());
        assert!(validate_optional_integer(&field(json!("three"))).is_err());
    }

    #[test]
    fn test_validate_number() {
        assert!(validate_number(&field(json!(0))).is_ok());
        assert!(validate_number(&field(json!("150.5"))).is_ok());
        assert_eq!(
            validate_number(&field(json!("cheap"))).unwrap_err().code,
            "not_numeric"
        );
    }
}
