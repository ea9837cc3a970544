//! Domain models for the insurance service.

pub mod faq;
pub mod insurance;
pub mod law;
pub mod service_request;
pub mod user;

pub use faq::{CreateFaqRequest, Faq, NewFaq};
pub use insurance::{CreateInsuranceRequest, Insurance, NewInsurance};
pub use law::{CreateLawRequest, Law, NewLaw};
pub use service_request::{
    AdminServiceRequest, CreateServiceRequest, NewServiceRequest, ServiceRequest,
    UpdateStatusRequest, UserServiceRequest,
};
pub use user::{Credentials, LoginRequest, NewUser, RegisterRequest, UpdateRoleRequest, User, UserRole};

use shared::field::truthy;
use shared::Field;

use crate::error::InputError;

/// Text of a field that passed `validate_present`.
fn text_value(field: Option<Field>) -> Result<String, InputError> {
    truthy(field)
        .map(|f| f.to_text())
        .ok_or(InputError::MissingFields)
}

/// Integer of a field that passed `validate_integer`.
fn int_value(field: Option<Field>) -> Result<i32, InputError> {
    truthy(field)
        .ok_or(InputError::MissingFields)?
        .to_i32()
        .map_err(|_| InputError::MissingFields)
}
