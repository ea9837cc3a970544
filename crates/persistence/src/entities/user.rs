//! User entity (database row mapping).

use sqlx::FromRow;
use std::str::FromStr;

use domain::models::UserRole;

/// Public columns of the users table. The password column is never selected.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: UserRole::from_str(&entity.role).unwrap_or_else(|_| {
                tracing::warn!(
                    user_id = entity.id,
                    role = %entity.role,
                    "Unknown stored role, treating as USER"
                );
                UserRole::User
            }),
        }
    }
}
