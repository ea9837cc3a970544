//! Frequently asked questions.

use serde::{Deserialize, Serialize};
use shared::field::optional_text;
use shared::Field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: i32,
    pub question_ar: Option<String>,
    pub question_en: Option<String>,
    pub answer_ar: Option<String>,
    pub answer_en: Option<String>,
}

/// Body of `POST /api/admin/faq`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFaqRequest {
    pub question_ar: Option<Field>,
    pub question_en: Option<Field>,
    pub answer_ar: Option<Field>,
    pub answer_en: Option<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFaq {
    pub question_ar: Option<String>,
    pub question_en: Option<String>,
    pub answer_ar: Option<String>,
    pub answer_en: Option<String>,
}

impl From<CreateFaqRequest> for NewFaq {
    fn from(req: CreateFaqRequest) -> Self {
        Self {
            question_ar: optional_text(req.question_ar),
            question_en: optional_text(req.question_en),
            answer_ar: optional_text(req.answer_ar),
            answer_en: optional_text(req.answer_en),
        }
    }
}
