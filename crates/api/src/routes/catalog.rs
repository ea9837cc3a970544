//! Public catalog listings.

use axum::{extract::State, Json};
use domain::models::{Faq, Insurance, Law};
use persistence::repositories::{FaqRepository, InsuranceRepository, LawRepository};

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/insurance
pub async fn list_insurance(
    State(state): State<AppState>,
) -> Result<Json<Vec<Insurance>>, ApiError> {
    let rows = InsuranceRepository::new(state.pool.clone()).list().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/laws
pub async fn list_laws(State(state): State<AppState>) -> Result<Json<Vec<Law>>, ApiError> {
    let rows = LawRepository::new(state.pool.clone()).list().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/faq
pub async fn list_faq(State(state): State<AppState>) -> Result<Json<Vec<Faq>>, ApiError> {
    let rows = FaqRepository::new(state.pool.clone()).list().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
