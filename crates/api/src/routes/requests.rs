//! Customer-facing service request routes.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::{
    CreateServiceRequest, NewServiceRequest, ServiceRequest, UserServiceRequest,
};
use persistence::repositories::ServiceRequestRepository;
use shared::validation::parse_row_id;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::middleware::metrics::record_service_request_created;

/// POST /api/requests
///
/// `user_id` is taken from the body as-is; there is no session to check it
/// against. An unknown user or product id is `INVALID_REFERENCE`.
pub async fn create_request(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateServiceRequest>,
) -> Result<Json<ServiceRequest>, ApiError> {
    request.validate()?;
    let new_request = NewServiceRequest::try_from(request)?;

    let repo = ServiceRequestRepository::new(state.pool.clone());
    let created: ServiceRequest = repo.create(&new_request).await?.into();

    record_service_request_created();
    info!(
        service_request_id = created.id,
        user_id = created.user_id,
        "Service request created"
    );

    Ok(Json(created))
}

/// GET /api/requests/my/:userId
///
/// A user id that is not a number matches nothing.
pub async fn list_my_requests(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<UserServiceRequest>>, ApiError> {
    let Some(user_id) = parse_row_id(&user_id) else {
        return Ok(Json(Vec::new()));
    };

    let repo = ServiceRequestRepository::new(state.pool.clone());
    let rows = repo.list_for_user(user_id).await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
