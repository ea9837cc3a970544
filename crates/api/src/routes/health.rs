//! Health check endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::app::AppState;

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Body of `GET /api/health/ready`.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub ok: bool,
    pub database: bool,
}

/// GET /api/health
///
/// Liveness only: never touches the database.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// GET /api/health/ready
///
/// Returns 503 while the database is unreachable.
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadyResponse>, (StatusCode, Json<ReadyResponse>)> {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => Ok(Json(ReadyResponse {
            ok: true,
            database: true,
        })),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse {
                    ok: false,
                    database: false,
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_body() {
        let Json(body) = health_check().await;
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({"ok": true})
        );
    }

    #[test]
    fn test_ready_response_serialization() {
        let body = ReadyResponse {
            ok: false,
            database: false,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({"ok": false, "database": false})
        );
    }
}
