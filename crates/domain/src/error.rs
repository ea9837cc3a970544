//! Input validation errors.

use thiserror::Error;
use validator::ValidationErrors;

/// Why a request payload was rejected before reaching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("required fields are missing")]
    MissingFields,

    #[error("role must be ADMIN or USER")]
    BadRole,

    #[error("status is missing")]
    MissingStatus,
}

/// Collapses field-level failures to the single error a client sees.
///
/// `role` and `status` are the only fields of their payloads, so a failure
/// on either names that payload's error. Everything else is a missing field.
impl From<ValidationErrors> for InputError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors.field_errors();
        if fields.contains_key("role") {
            InputError::BadRole
        } else if fields.contains_key("status") {
            InputError::MissingStatus
        } else {
            InputError::MissingFields
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    fn failing(field: &'static str) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.add(field, ValidationError::new("missing"));
        errors
    }

    #[test]
    fn test_from_validation_errors() {
        assert_eq!(InputError::from(failing("role")), InputError::BadRole);
        assert_eq!(InputError::from(failing("status")), InputError::MissingStatus);
        assert_eq!(InputError::from(failing("email")), InputError::MissingFields);
        assert_eq!(InputError::from(failing("car_year")), InputError::MissingFields);
    }
}
