//! Law entity (database row mapping).

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct LawEntity {
    pub id: i32,
    pub title_ar: Option<String>,
    pub title_en: Option<String>,
    pub description_ar: Option<String>,
    pub description_en: Option<String>,
}

impl From<LawEntity> for domain::models::Law {
    fn from(entity: LawEntity) -> Self {
        Self {
            id: entity.id,
            title_ar: entity.title_ar,
            title_en: entity.title_en,
            description_ar: entity.description_ar,
            description_en: entity.description_en,
        }
    }
}
