//! Admin gate middleware.
//!
//! Admin routes are guarded by an [`AdminGate`] held in application state.
//! The shipped gate, [`RoleHeaderGate`], trusts a client-supplied header:
//! any caller that sends `X-Role: ADMIN` is treated as an admin. There is no
//! token, session or signature behind it. Swap the gate in `AppState` to
//! introduce real credentials without touching the routes.

use axum::{
    body::Body,
    extract::State,
    http::{header::InvalidHeaderName, HeaderMap, HeaderName, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::config::SecurityConfig;
use crate::error::ApiError;

/// Decides whether a request carries admin privileges.
pub trait AdminGate: Send + Sync {
    fn is_admin(&self, headers: &HeaderMap) -> bool;
}

/// Grants admin access when a header equals an exact value.
#[derive(Debug, Clone)]
pub struct RoleHeaderGate {
    header: HeaderName,
    value: String,
}

impl RoleHeaderGate {
    pub fn new(header: &str, value: impl Into<String>) -> Result<Self, InvalidHeaderName> {
        Ok(Self {
            header: HeaderName::from_bytes(header.as_bytes())?,
            value: value.into(),
        })
    }

    pub fn from_config(config: &SecurityConfig) -> Result<Self, InvalidHeaderName> {
        Self::new(&config.admin_header, config.admin_value.clone())
    }
}

impl Default for RoleHeaderGate {
    fn default() -> Self {
        Self {
            header: HeaderName::from_static("x-role"),
            value: "ADMIN".to_string(),
        }
    }
}

impl AdminGate for RoleHeaderGate {
    /// The header must appear exactly once. A repeated header is ambiguous
    /// and never grants access, even if one of its values matches.
    fn is_admin(&self, headers: &HeaderMap) -> bool {
        let mut values = headers.get_all(&self.header).iter();
        match (values.next(), values.next()) {
            (Some(value), None) => value.to_str().is_ok_and(|v| v == self.value),
            _ => false,
        }
    }
}

/// Middleware for admin-only routes.
///
/// Runs before any extractor, so a non-admin request is rejected with
/// `ADMIN_ONLY` whatever its body contains.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !state.admin_gate.is_admin(req.headers()) {
        tracing::debug!(path = %req.uri().path(), "Rejected non-admin request");
        return ApiError::AdminOnly.into_response();
    }

    next.run(req).await
}
