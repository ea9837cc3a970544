//! User account domain models.

use serde::{Deserialize, Serialize};
use shared::validation::normalize_email;
use shared::Field;
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use super::text_value;
use crate::error::InputError;

/// Account role stored in `users.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    /// Only the exact upper-case spellings are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(UserRole::User),
            "ADMIN" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user account as returned to clients. The password never leaves the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Body of `POST /api/register`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required, custom(function = "shared::validation::validate_present"))]
    pub name: Option<Field>,
    #[validate(required, custom(function = "shared::validation::validate_present"))]
    pub email: Option<Field>,
    #[validate(required, custom(function = "shared::validation::validate_present"))]
    pub password: Option<Field>,
}

/// A validated registration, email already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl TryFrom<RegisterRequest> for NewUser {
    type Error = InputError;

    fn try_from(request: RegisterRequest) -> Result<Self, Self::Error> {
        Ok(NewUser {
            name: text_value(request.name)?,
            email: normalize_email(&text_value(request.email)?),
            password: text_value(request.password)?,
        })
    }
}

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required, custom(function = "shared::validation::validate_present"))]
    pub email: Option<Field>,
    #[validate(required, custom(function = "shared::validation::validate_present"))]
    pub password: Option<Field>,
}

/// Plaintext credentials matched verbatim against the `users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for Credentials {
    type Error = InputError;

    fn try_from(request: LoginRequest) -> Result<Self, Self::Error> {
        Ok(Credentials {
            email: normalize_email(&text_value(request.email)?),
            password: text_value(request.password)?,
        })
    }
}

/// Body of `PATCH /api/admin/users/:id/role`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    #[validate(required, custom(function = "validate_role"))]
    pub role: Option<Field>,
}

impl TryFrom<UpdateRoleRequest> for UserRole {
    type Error = InputError;

    fn try_from(request: UpdateRoleRequest) -> Result<Self, Self::Error> {
        match request.role {
            Some(Field::Text(role)) => role.parse().map_err(|_| InputError::BadRole),
            _ => Err(InputError::BadRole),
        }
    }
}

/// Only the strings `"ADMIN"` and `"USER"` name a role.
fn validate_role(role: &Field) -> Result<(), ValidationError> {
    match role {
        Field::Text(role) if role.parse::<UserRole>().is_ok() => Ok(()),
        _ => {
            let mut err = ValidationError::new("invalid_role");
            err.message = Some("Role must be 'ADMIN' or 'USER'".into());
            Err(err)
        }
    }
}
