//! FAQ entity (database row mapping).

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct FaqEntity {
    pub id: i32,
    pub question_ar: Option<String>,
    pub question_en: Option<String>,
    pub answer_ar: Option<String>,
    pub answer_en: Option<String>,
}

impl From<FaqEntity> for domain::models::Faq {
    fn from(entity: FaqEntity) -> Self {
        Self {
            id: entity.id,
            question_ar: entity.question_ar,
            question_en: entity.question_en,
            answer_ar: entity.answer_ar,
            answer_en: entity.answer_en,
        }
    }
}
