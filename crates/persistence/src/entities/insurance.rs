//! Insurance product entity (database row mapping).

use sqlx::FromRow;

/// Row of the insurance table with `price_from` read as float8.
#[derive(Debug, Clone, FromRow)]
pub struct InsuranceEntity {
    pub id: i32,
    pub title_ar: Option<String>,
    pub title_en: Option<String>,
    pub category_ar: Option<String>,
    pub category_en: Option<String>,
    pub price_from: Option<f64>,
    pub description_ar: Option<String>,
    pub description_en: Option<String>,
}

impl From<InsuranceEntity> for domain::models::Insurance {
    fn from(entity: InsuranceEntity) -> Self {
        Self {
            id: entity.id,
            title_ar: entity.title_ar,
            title_en: entity.title_en,
            category_ar: entity.category_ar,
            category_en: entity.category_en,
            price_from: entity.price_from,
            description_ar: entity.description_ar,
            description_en: entity.description_en,
        }
    }
}
