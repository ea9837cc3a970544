//! User repository for database operations.

use domain::models::{Credentials, NewUser, UserRole};
use sqlx::PgPool;

use crate::entities::UserEntity;
use crate::error::StoreError;
use crate::metrics::QueryTimer;

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new account with role `USER`.
    ///
    /// A taken email surfaces as [`StoreError::UniqueViolation`].
    pub async fn create_user(&self, user: &NewUser) -> Result<UserEntity, StoreError> {
        let timer = QueryTimer::new("create_user");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (name, email, password, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, role
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(UserRole::User.as_str())
        .fetch_one(&self.pool)
        .await;
        timer.record();
        Ok(result?)
    }

    /// Find the account whose email and plaintext password both match exactly.
    pub async fn find_by_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<UserEntity>, StoreError> {
        let timer = QueryTimer::new("find_user_by_credentials");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email, role
            FROM users
            WHERE email = $1 AND password = $2
            "#,
        )
        .bind(&credentials.email)
        .bind(&credentials.password)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        Ok(result?)
    }

    /// List every account, newest first.
    pub async fn list_users(&self) -> Result<Vec<UserEntity>, StoreError> {
        let timer = QueryTimer::new("list_users");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email, role
            FROM users
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(result?)
    }

    /// Change a user's role. Returns `None` when no user has the given id.
    pub async fn update_role(
        &self,
        id: i32,
        role: UserRole,
    ) -> Result<Option<UserEntity>, StoreError> {
        let timer = QueryTimer::new("update_user_role");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            UPDATE users
            SET role = $1
            WHERE id = $2
            RETURNING id, name, email, role
            "#,
        )
        .bind(role.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        Ok(result?)
    }
}
