//! Admin routes.
//!
//! Mounted behind [`require_admin`](crate::middleware::require_admin), so
//! handlers here never see a non-admin request.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::{
    AdminServiceRequest, CreateFaqRequest, CreateInsuranceRequest, CreateLawRequest, Faq,
    Insurance, Law, NewFaq, NewInsurance, NewLaw, ServiceRequest, UpdateRoleRequest,
    UpdateStatusRequest, User, UserRole,
};
use persistence::repositories::{
    FaqRepository, InsuranceRepository, LawRepository, ServiceRequestRepository, UserRepository,
};
use shared::validation::parse_row_id;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::JsonBody;

/// POST /api/admin/insurance
pub async fn create_insurance(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateInsuranceRequest>,
) -> Result<Json<Insurance>, ApiError> {
    request.validate()?;
    let new_insurance = NewInsurance::try_from(request)?;

    let repo = InsuranceRepository::new(state.pool.clone());
    let created: Insurance = repo.create(&new_insurance).await?.into();

    info!(insurance_id = created.id, "Insurance product created");
    Ok(Json(created))
}

/// POST /api/admin/laws
///
/// Every field is optional.
pub async fn create_law(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateLawRequest>,
) -> Result<Json<Law>, ApiError> {
    let repo = LawRepository::new(state.pool.clone());
    let created: Law = repo.create(&NewLaw::from(request)).await?.into();

    info!(law_id = created.id, "Law created");
    Ok(Json(created))
}

/// POST /api/admin/faq
///
/// Every field is optional.
pub async fn create_faq(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateFaqRequest>,
) -> Result<Json<Faq>, ApiError> {
    let repo = FaqRepository::new(state.pool.clone());
    let created: Faq = repo.create(&NewFaq::from(request)).await?.into();

    info!(faq_id = created.id, "FAQ entry created");
    Ok(Json(created))
}

/// GET /api/admin/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo.list_users().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// PATCH /api/admin/users/:id/role
///
/// The role is checked before the id, so a bad role on an unknown user is
/// still `BAD_ROLE`.
pub async fn update_user_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateRoleRequest>,
) -> Result<Json<User>, ApiError> {
    request.validate()?;
    let role = UserRole::try_from(request)?;
    let id = parse_row_id(&id).ok_or(ApiError::NotFound)?;

    let repo = UserRepository::new(state.pool.clone());
    let user: User = repo
        .update_role(id, role)
        .await?
        .ok_or(ApiError::NotFound)?
        .into();

    info!(user_id = user.id, role = %user.role, "User role changed");
    Ok(Json(user))
}

/// GET /api/admin/requests
pub async fn list_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminServiceRequest>>, ApiError> {
    let repo = ServiceRequestRepository::new(state.pool.clone());
    let rows = repo.list_all().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// PATCH /api/admin/requests/:id/status
///
/// Status is free text; any truthy value is stored as given.
pub async fn update_request_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateStatusRequest>,
) -> Result<Json<ServiceRequest>, ApiError> {
    request.validate()?;
    let status = request.into_status()?;
    let id = parse_row_id(&id).ok_or(ApiError::NotFound)?;

    let repo = ServiceRequestRepository::new(state.pool.clone());
    let updated: ServiceRequest = repo
        .update_status(id, &status)
        .await?
        .ok_or(ApiError::NotFound)?
        .into();

    info!(
        service_request_id = updated.id,
        status = %status,
        "Request status changed"
    );
    Ok(Json(updated))
}
