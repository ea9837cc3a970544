use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::InputError;
use persistence::StoreError;
use serde::Serialize;
use thiserror::Error;

/// Errors returned by handlers. Each maps to a status and a stable code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Required fields are missing")]
    MissingFields,

    #[error("Email already registered")]
    EmailExists,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Admin role required")]
    AdminOnly,

    #[error("Role must be ADMIN or USER")]
    BadRole,

    #[error("Status is missing")]
    MissingStatus,

    #[error("Not found")]
    NotFound,

    #[error("Referenced row does not exist")]
    InvalidReference,

    #[error("Malformed JSON body: {0}")]
    InvalidJson(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields
            | ApiError::BadRole
            | ApiError::MissingStatus
            | ApiError::InvalidReference
            | ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::AdminOnly => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::EmailExists => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Code placed in the `error` field of the response body.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MissingFields => "MISSING_FIELDS",
            ApiError::EmailExists => "EMAIL_EXISTS",
            ApiError::InvalidCredentials => "INVALID",
            ApiError::AdminOnly => "ADMIN_ONLY",
            ApiError::BadRole => "BAD_ROLE",
            ApiError::MissingStatus => "MISSING_STATUS",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::InvalidReference => "INVALID_REFERENCE",
            ApiError::InvalidJson(_) => "INVALID_JSON",
            ApiError::Internal(_) => "SERVER_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            ApiError::InvalidJson(msg) => tracing::debug!("Rejected body: {}", msg),
            _ => {}
        }

        let body = ErrorBody { error: self.code() };
        (self.status(), Json(body)).into_response()
    }
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::MissingFields => ApiError::MissingFields,
            InputError::BadRole => ApiError::BadRole,
            InputError::MissingStatus => ApiError::MissingStatus,
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        for (field, errors) in errors.field_errors() {
            for e in errors {
                tracing::debug!(field = %field, code = %e.code, "Validation failed");
            }
        }
        InputError::from(errors).into()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ForeignKeyViolation { .. } => ApiError::InvalidReference,
            other => ApiError::Internal(other.to_string()),
        }
    }
}
