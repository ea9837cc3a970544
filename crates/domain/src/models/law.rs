//! Law reference entries.

use serde::{Deserialize, Serialize};
use shared::field::optional_text;
use shared::Field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Law {
    pub id: i32,
    pub title_ar: Option<String>,
    pub title_en: Option<String>,
    pub description_ar: Option<String>,
    pub description_en: Option<String>,
}

/// Body of `POST /api/admin/laws`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateLawRequest {
    pub title_ar: Option<Field>,
    pub title_en: Option<Field>,
    pub description_ar: Option<Field>,
    pub description_en: Option<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLaw {
    pub title_ar: Option<String>,
    pub title_en: Option<String>,
    pub description_ar: Option<String>,
    pub description_en: Option<String>,
}

impl From<CreateLawRequest> for NewLaw {
    fn from(req: CreateLawRequest) -> Self {
        Self {
            title_ar: optional_text(req.title_ar),
            title_en: optional_text(req.title_en),
            description_ar: optional_text(req.description_ar),
            description_en: optional_text(req.description_en),
        }
    }
}
