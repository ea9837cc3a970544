//! Repositories for the admin-managed catalog: insurance products, laws
//! and FAQ entries.
//!
//! Catalog rows are append-only. Listings return every row, newest first.

use domain::models::{NewFaq, NewInsurance, NewLaw};
use sqlx::PgPool;

use crate::entities::{FaqEntity, InsuranceEntity, LawEntity};
use crate::error::StoreError;
use crate::metrics::QueryTimer;

/// Repository for insurance products.
#[derive(Clone)]
pub struct InsuranceRepository {
    pool: PgPool,
}

impl InsuranceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<InsuranceEntity>, StoreError> {
        let timer = QueryTimer::new("list_insurance");
        let result = sqlx::query_as::<_, InsuranceEntity>(
            r#"
            SELECT id, title_ar, title_en, category_ar, category_en,
                   price_from::float8 AS price_from, description_ar, description_en
            FROM insurance
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(result?)
    }

    pub async fn create(&self, insurance: &NewInsurance) -> Result<InsuranceEntity, StoreError> {
        let timer = QueryTimer::new("create_insurance");
        let result = sqlx::query_as::<_, InsuranceEntity>(
            r#"
            INSERT INTO insurance
                (title_ar, title_en, category_ar, category_en, price_from,
                 description_ar, description_en)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title_ar, title_en, category_ar, category_en,
                      price_from::float8 AS price_from, description_ar, description_en
            "#,
        )
        .bind(&insurance.title_ar)
        .bind(&insurance.title_en)
        .bind(&insurance.category_ar)
        .bind(&insurance.category_en)
        .bind(insurance.price_from)
        .bind(&insurance.description_ar)
        .bind(&insurance.description_en)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        Ok(result?)
    }
}

/// Repository for law reference entries.
#[derive(Clone)]
pub struct LawRepository {
    pool: PgPool,
}

impl LawRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<LawEntity>, StoreError> {
        let timer = QueryTimer::new("list_laws");
        let result = sqlx::query_as::<_, LawEntity>(
            r#"
            SELECT id, title_ar, title_en, description_ar, description_en
            FROM laws
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(result?)
    }

    pub async fn create(&self, law: &NewLaw) -> Result<LawEntity, StoreError> {
        let timer = QueryTimer::new("create_law");
        let result = sqlx::query_as::<_, LawEntity>(
            r#"
            INSERT INTO laws (title_ar, title_en, description_ar, description_en)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title_ar, title_en, description_ar, description_en
            "#,
        )
        .bind(&law.title_ar)
        .bind(&law.title_en)
        .bind(&law.description_ar)
        .bind(&law.description_en)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        Ok(result?)
    }
}

/// Repository for FAQ entries.
#[derive(Clone)]
pub struct FaqRepository {
    pool: PgPool,
}

impl FaqRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<FaqEntity>, StoreError> {
        let timer = QueryTimer::new("list_faq");
        let result = sqlx::query_as::<_, FaqEntity>(
            r#"
            SELECT id, question_ar, question_en, answer_ar, answer_en
            FROM faq
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        Ok(result?)
    }

    pub async fn create(&self, faq: &NewFaq) -> Result<FaqEntity, StoreError> {
        let timer = QueryTimer::new("create_faq");
        let result = sqlx::query_as::<_, FaqEntity>(
            r#"
            INSERT INTO faq (question_ar, question_en, answer_ar, answer_en)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question_ar, question_en, answer_ar, answer_en
            "#,
        )
        .bind(&faq.question_ar)
        .bind(&faq.question_en)
        .bind(&faq.answer_ar)
        .bind(&faq.answer_en)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        Ok(result?)
    }
}
