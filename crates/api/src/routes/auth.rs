//! Account routes: registration and login.
//!
//! Credentials are stored and compared as plaintext and no session or token
//! is issued. Login simply returns the matching user row.

use axum::{extract::State, Json};
use domain::models::{Credentials, LoginRequest, NewUser, RegisterRequest, User};
use persistence::repositories::UserRepository;
use persistence::StoreError;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::middleware::metrics::record_user_registered;

/// POST /api/register
///
/// Creates a `USER` account. The email is lower-cased before storage.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<Json<User>, ApiError> {
    request.validate()?;
    let new_user = NewUser::try_from(request)?;

    let repo = UserRepository::new(state.pool.clone());
    let user: User = repo
        .create_user(&new_user)
        .await
        .map_err(|e| match e {
            StoreError::UniqueViolation { .. } => ApiError::EmailExists,
            other => other.into(),
        })?
        .into();

    record_user_registered();
    info!(user_id = user.id, "User registered");

    Ok(Json(user))
}

/// POST /api/login
///
/// Unknown email and wrong password are indistinguishable: both are `INVALID`.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<User>, ApiError> {
    request.validate()?;
    let credentials = Credentials::try_from(request)?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_credentials(&credentials)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    Ok(Json(user.into()))
}
