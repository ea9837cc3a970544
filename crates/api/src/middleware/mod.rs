//! HTTP middleware components.

pub mod admin;
pub mod logging;
pub mod metrics;
pub mod trace_id;

pub use admin::{require_admin, AdminGate, RoleHeaderGate};
pub use metrics::{init_metrics, metrics_handler, metrics_middleware};
pub use trace_id::{trace_id, REQUEST_ID_HEADER};
