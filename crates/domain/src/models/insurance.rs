//! Insurance product domain models.

use serde::{Deserialize, Serialize};
use shared::field::optional_text;
use shared::Field;
use validator::Validate;

use crate::error::InputError;

/// An insurance product in the public catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insurance {
    pub id: i32,
    pub title_ar: Option<String>,
    pub title_en: Option<String>,
    pub category_ar: Option<String>,
    pub category_en: Option<String>,
    pub price_from: Option<f64>,
    pub description_ar: Option<String>,
    pub description_en: Option<String>,
}

/// Body of `POST /api/admin/insurance`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateInsuranceRequest {
    pub title_ar: Option<Field>,
    pub title_en: Option<Field>,
    pub category_ar: Option<Field>,
    pub category_en: Option<Field>,
    /// Must be supplied, but zero is a valid price.
    #[validate(required, custom(function = "shared::validation::validate_number"))]
    pub price_from: Option<Field>,
    pub description_ar: Option<Field>,
    pub description_en: Option<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInsurance {
    pub title_ar: Option<String>,
    pub title_en: Option<String>,
    pub category_ar: Option<String>,
    pub category_en: Option<String>,
    pub price_from: f64,
    pub description_ar: Option<String>,
    pub description_en: Option<String>,
}

impl TryFrom<CreateInsuranceRequest> for NewInsurance {
    type Error = InputError;

    fn try_from(request: CreateInsuranceRequest) -> Result<Self, Self::Error> {
        let price_from = request
            .price_from
            .ok_or(InputError::MissingFields)?
            .to_f64()
            .map_err(|_| InputError::MissingFields)?;

        Ok(NewInsurance {
            title_ar: optional_text(request.title_ar),
            title_en: optional_text(request.title_en),
            category_ar: optional_text(request.category_ar),
            category_en: optional_text(request.category_en),
            price_from,
            description_ar: optional_text(request.description_ar),
            description_en: optional_text(request.description_en),
        })
    }
}
