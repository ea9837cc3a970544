//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod faq;
pub mod insurance;
pub mod law;
pub mod service_request;
pub mod user;

pub use faq::FaqEntity;
pub use insurance::InsuranceEntity;
pub use law::LawEntity;
pub use service_request::{
    AdminServiceRequestEntity, ServiceRequestEntity, UserServiceRequestEntity,
};
pub use user::UserEntity;
