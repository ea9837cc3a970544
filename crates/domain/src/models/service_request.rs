//! Service request domain models.
//!
//! A service request is a customer's application for coverage on a vehicle,
//! optionally tied to a catalog insurance product. Admins move it through
//! free-text statuses.

use serde::{Deserialize, Serialize};
use shared::field::{optional_text, truthy};
use shared::Field;
use validator::Validate;

use super::{int_value, text_value};
use crate::error::InputError;

/// A row of the `requests` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: i32,
    pub user_id: i32,
    pub insurance_id: Option<i32>,
    pub full_name: String,
    pub phone: String,
    pub car_model: String,
    pub car_year: i32,
    pub notes: Option<String>,
    pub status: Option<String>,
}

/// A request as listed for its owner, with the linked product's titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserServiceRequest {
    #[serde(flatten)]
    pub request: ServiceRequest,
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
}

/// A request as listed for admins, with owner and product details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminServiceRequest {
    #[serde(flatten)]
    pub request: ServiceRequest,
    pub user_name: String,
    pub user_email: String,
    pub ins_title_en: Option<String>,
    pub ins_title_ar: Option<String>,
}

/// Body of `POST /api/requests`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(required, custom(function = "shared::validation::validate_integer"))]
    pub user_id: Option<Field>,
    #[validate(custom(function = "shared::validation::validate_optional_integer"))]
    pub insurance_id: Option<Field>,
    #[validate(required, custom(function = "shared::validation::validate_present"))]
    pub full_name: Option<Field>,
    #[validate(required, custom(function = "shared::validation::validate_present"))]
    pub phone: Option<Field>,
    #[validate(required, custom(function = "shared::validation::validate_present"))]
    pub car_model: Option<Field>,
    #[validate(required, custom(function = "shared::validation::validate_integer"))]
    pub car_year: Option<Field>,
    pub notes: Option<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewServiceRequest {
    pub user_id: i32,
    pub insurance_id: Option<i32>,
    pub full_name: String,
    pub phone: String,
    pub car_model: String,
    pub car_year: i32,
    pub notes: Option<String>,
}

impl TryFrom<CreateServiceRequest> for NewServiceRequest {
    type Error = InputError;

    /// A falsy `insurance_id` (absent, `0`, `""`) is stored as NULL.
    fn try_from(request: CreateServiceRequest) -> Result<Self, Self::Error> {
        let insurance_id = truthy(request.insurance_id)
            .map(|f| f.to_i32().map_err(|_| InputError::MissingFields))
            .transpose()?;

        Ok(NewServiceRequest {
            user_id: int_value(request.user_id)?,
            insurance_id,
            full_name: text_value(request.full_name)?,
            phone: text_value(request.phone)?,
            car_model: text_value(request.car_model)?,
            car_year: int_value(request.car_year)?,
            notes: optional_text(request.notes),
        })
    }
}

/// Body of `PATCH /api/admin/requests/:id/status`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[validate(required, custom(function = "shared::validation::validate_present"))]
    pub status: Option<Field>,
}

impl UpdateStatusRequest {
    /// The new status as column text.
    pub fn into_status(self) -> Result<String, InputError> {
        truthy(self.status)
            .map(|f| f.to_text())
            .ok_or(InputError::MissingStatus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create(body: serde_json::Value) -> Result<NewServiceRequest, InputError> {
        let request: CreateServiceRequest = serde_json::from_value(body).unwrap();
        request.validate()?;
        NewServiceRequest::try_from(request)
    }

    fn complete_body() -> serde_json::Value {
        json!({
            "user_id": 7,
            "full_name": "Omar Haddad",
            "phone": "+962790000000",
            "car_model": "Corolla",
            "car_year": 2019
        })
    }

    #[test]
    fn test_create_request_complete() {
        let req = create(complete_body()).unwrap();
        assert_eq!(req.user_id, 7);
        assert_eq!(req.car_year, 2019);
        assert_eq!(req.insurance_id, None);
        assert_eq!(req.notes, None);
    }

    #[test]
    fn test_create_request_missing_car_year() {
        let mut body = complete_body();
        body.as_object_mut().unwrap().remove("car_year");
        assert_eq!(create(body), Err(InputError::MissingFields));
    }

    #[test]
    fn test_create_request_each_required_field() {
        for field in ["user_id", "full_name", "phone", "car_model", "car_year"] {
            let mut body = complete_body();
            body[field] = json!("");
            assert_eq!(create(body), Err(InputError::MissingFields), "{}", field);
        }
    }

    #[test]
    fn test_create_request_coerces_numeric_strings() {
        let mut body = complete_body();
        body["user_id"] = json!("7");
        body["car_year"] = json!("2021");
        body["insurance_id"] = json!("3");
        body["notes"] = json!("Second owner");
        let req = create(body).unwrap();
        assert_eq!(req.user_id, 7);
        assert_eq!(req.car_year, 2021);
        assert_eq!(req.insurance_id, Some(3));
        assert_eq!(req.notes.as_deref(), Some("Second owner"));
    }

    #[test]
    fn test_create_request_rejects_non_numeric_year() {
        let mut body = complete_body();
        body["car_year"] = json!("twenty");
        assert_eq!(create(body), Err(InputError::MissingFields));
    }

    #[test]
    fn test_create_request_rejects_non_numeric_insurance() {
        let mut body = complete_body();
        body["insurance_id"] = json!("basic");
        let request: CreateServiceRequest = serde_json::from_value(body).unwrap();
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.field_errors()["insurance_id"][0].code, "not_integer");
        assert_eq!(InputError::from(errors), InputError::MissingFields);
    }

    #[test]
    fn test_create_request_zero_insurance_is_null() {
        let mut body = complete_body();
        body["insurance_id"] = json!(0);
        assert_eq!(create(body).unwrap().insurance_id, None);
    }

    #[test]
    fn test_update_status() {
        let parse = |v: serde_json::Value| -> Result<String, InputError> {
            let request: UpdateStatusRequest = serde_json::from_value(v).unwrap();
            request.validate()?;
            request.into_status()
        };
        assert_eq!(parse(json!({"status": "APPROVED"})), Ok("APPROVED".to_string()));
        assert_eq!(parse(json!({"status": 2})), Ok("2".to_string()));
        assert_eq!(parse(json!({"status": ""})), Err(InputError::MissingStatus));
        assert_eq!(parse(json!({"status": 0})), Err(InputError::MissingStatus));
        assert_eq!(parse(json!({})), Err(InputError::MissingStatus));
    }

    #[test]
    fn test_user_request_flattens() {
        let row = UserServiceRequest {
            request: ServiceRequest {
                id: 1,
                user_id: 7,
                insurance_id: None,
                full_name: "Omar Haddad".to_string(),
                phone: "0790000000".to_string(),
                car_model: "Corolla".to_string(),
                car_year: 2019,
                notes: None,
                status: Some("PENDING".to_string()),
            },
            title_en: None,
            title_ar: None,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["id"], json!(1));
        assert_eq!(value["car_model"], json!("Corolla"));
        assert_eq!(value["title_en"], serde_json::Value::Null);
        assert!(value.get("request").is_none());
    }
}
