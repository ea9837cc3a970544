//! Service request repository for database operations.

use domain::models::NewServiceRequest;
use sqlx::PgPool;

use crate::entities::{AdminServiceRequestEntity, ServiceRequestEntity, UserServiceRequestEntity};
use crate::error::StoreError;
use crate::metrics::QueryTimer;

/// Repository for service request operations.
#[derive(Clone)]
pub struct ServiceRequestRepository {
    pool: PgPool,
}

impl ServiceRequestRepository {
    /// Creates a new ServiceRequestRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a request; its status comes from the column default.
    ///
    /// An unknown `user_id` or `insurance_id` surfaces as
    /// [`StoreError::ForeignKeyViolation`].
    pub async fn create(
        &self,
        request: &NewServiceRequest,
    ) -> Result<ServiceRequestEntity, StoreError> {
        let timer = QueryTimer::new("create_service_request");
        let result = sqlx::query_as::<_, ServiceRequestEntity>(
            r#"
            INSERT INTO requests
                (user_id, insurance_id, full_name, phone, car_model, car_year, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, insurance_id, full_name, phone, car_model, car_year,
                      notes, status
            "#,
        )
        .bind(request.user_id)
        .bind(request.insurance_id)
        .bind(&request.full_name)
        .bind(&request.phone)
        .bind(&request.car_model)
        .bind(request.car_year)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        Ok(result?)
    }

    /// List one user's requests, newest first, with the linked product titles.
    pub async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<UserServiceRequestEntity>, StoreError> {
        let timer = QueryTimer::new("list_service_requests_for_user");
        let result = sqlx::query_as::<_, UserServiceRequestEntity>(
            r#"
            SELECT r.id, r.user_id, r.insurance_id, r.full_name, r.phone, r.car_model,
                   r.car_year, r.notes, r.status,
                   i.title_en, i.title_ar
            FROM requests r
            LEFT JOIN insurance i ON i.id = r.insurance_id
            WHERE r.user_id = $1
            ORDER BY r.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(result?)
    }

    /// List every request, newest first, with owner and product details.
    pub async fn list_all(&self) -> Result<Vec<AdminServiceRequestEntity>, StoreError> {
        let timer = QueryTimer::new("list_service_requests");
        let result = sqlx::query_as::<_, AdminServiceRequestEntity>(
            r#"
            SELECT r.id, r.user_id, r.insurance_id, r.full_name, r.phone, r.car_model,
                   r.car_year, r.notes, r.status,
                   u.name AS user_name, u.email AS user_email,
                   i.title_en AS ins_title_en, i.title_ar AS ins_title_ar
            FROM requests r
            JOIN users u ON u.id = r.user_id
            LEFT JOIN insurance i ON i.id = r.insurance_id
            ORDER BY r.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(result?)
    }

    /// Set a request's status. Returns `None` when no request has the given id.
    pub async fn update_status(
        &self,
        id: i32,
        status: &str,
    ) -> Result<Option<ServiceRequestEntity>, StoreError> {
        let timer = QueryTimer::new("update_service_request_status");
        let result = sqlx::query_as::<_, ServiceRequestEntity>(
            r#"
            UPDATE requests
            SET status = $1
            WHERE id = $2
            RETURNING id, user_id, insurance_id, full_name, phone, car_model, car_year,
                      notes, status
            "#,
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        Ok(result?)
    }
}
