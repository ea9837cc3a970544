//! Repository implementations for database operations.

pub mod catalog;
pub mod service_request;
pub mod user;

pub use catalog::{FaqRepository, InsuranceRepository, LawRepository};
pub use service_request::ServiceRequestRepository;
pub use user::UserRepository;
