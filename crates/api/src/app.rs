use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_admin, trace_id, AdminGate, RoleHeaderGate,
};
use crate::routes::{admin, auth, catalog, health, requests};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub admin_gate: Arc<dyn AdminGate>,
}

/// Builds the router with the header gate described by `config.security`.
///
/// An unusable header name falls back to `X-Role: ADMIN`. `Config::load`
/// already rejects such names, so this only matters for hand-built configs.
pub fn create_app(config: Config, pool: PgPool) -> Router {
    let gate = match RoleHeaderGate::from_config(&config.security) {
        Ok(gate) => gate,
        Err(e) => {
            tracing::warn!(
                header = %config.security.admin_header,
                error = %e,
                "Invalid admin header name, using X-Role"
            );
            RoleHeaderGate::default()
        }
    };
    create_app_with_gate(config, pool, Arc::new(gate))
}

/// Builds the router with a caller-supplied admin gate.
pub fn create_app_with_gate(
    config: Config,
    pool: PgPool,
    admin_gate: Arc<dyn AdminGate>,
) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
        admin_gate,
    };

    let cors = build_cors(&config.security.cors_origins);

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/insurance", get(catalog::list_insurance))
        .route("/api/laws", get(catalog::list_laws))
        .route("/api/faq", get(catalog::list_faq))
        .route("/api/requests", post(requests::create_request))
        .route("/api/requests/my/:user_id", get(requests::list_my_requests));

    // The gate is a route layer so it runs before any body extractor.
    let admin_routes = Router::new()
        .route("/api/admin/insurance", post(admin::create_insurance))
        .route("/api/admin/laws", post(admin::create_law))
        .route("/api/admin/faq", post(admin::create_faq))
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/users/:id/role", patch(admin::update_user_role))
        .route("/api/admin/requests", get(admin::list_requests))
        .route(
            "/api/admin/requests/:id/status",
            patch(admin::update_request_status),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let mut router = Router::new().merge(public_routes).merge(admin_routes);

    if config.metrics.enabled {
        router = router.route("/metrics", get(metrics_handler));
    }

    // Global middleware (bottom layers run first)
    router
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}

/// Any origin when the list is empty, otherwise only the listed ones.
fn build_cors(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<_> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
