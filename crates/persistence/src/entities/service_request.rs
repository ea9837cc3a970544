//! Service request entities (database row mappings).

use sqlx::FromRow;

/// Database row mapping for the requests table.
#[derive(Debug, Clone, FromRow)]
pub struct ServiceRequestEntity {
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

/// A request joined with its insurance product titles.
#[derive(Debug, Clone, FromRow)]
pub struct UserServiceRequestEntity {
    #[sqlx(flatten)]
    pub request: ServiceRequestEntity,
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
}

/// A request joined with its owner and insurance product titles.
#[derive(Debug, Clone, FromRow)]
pub struct AdminServiceRequestEntity {
    #[sqlx(flatten)]
    pub request: ServiceRequestEntity,
    pub user_name: String,
    pub user_email: String,
    pub ins_title_en: Option<String>,
    pub ins_title_ar: Option<String>,
}

impl From<ServiceRequestEntity> for domain::models::ServiceRequest {
    fn from(entity: ServiceRequestEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            insurance_id: entity.insurance_id,
            full_name: entity.full_name,
            phone: entity.phone,
            car_model: entity.car_model,
            car_year: entity.car_year,
            notes: entity.notes,
            status: entity.status,
        }
    }
}

impl From<UserServiceRequestEntity> for domain::models::UserServiceRequest {
    fn from(entity: UserServiceRequestEntity) -> Self {
        Self {
            request: entity.request.into(),
            title_en: entity.title_en,
            title_ar: entity.title_ar,
        }
    }
}

impl From<AdminServiceRequestEntity> for domain::models::AdminServiceRequest {
    fn from(entity: AdminServiceRequestEntity) -> Self {
        Self {
            request: entity.request.into(),
            user_name: entity.user_name,
            user_email: entity.user_email,
            ins_title_en: entity.ins_title_en,
            ins_title_ar: entity.ins_title_ar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::AdminServiceRequest;

    #[test]
    fn test_admin_request_entity_to_domain() {
        let entity = AdminServiceRequestEntity {
            request: ServiceRequestEntity {
                id: 9,
                user_id: 2,
                insurance_id: Some(4),
                full_name: "Rami Saleh".to_string(),
                phone: "0780000000".to_string(),
                car_model: "Elantra".to_string(),
                car_year: 2017,
                notes: None,
                status: Some("PENDING".to_string()),
            },
            user_name: "Rami".to_string(),
            user_email: "rami@example.com".to_string(),
            ins_title_en: Some("Comprehensive".to_string()),
            ins_title_ar: None,
        };

        let row: AdminServiceRequest = entity.into();
        assert_eq!(row.request.id, 9);
        assert_eq!(row.request.insurance_id, Some(4));
        assert_eq!(row.user_email, "rami@example.com");
        assert_eq!(row.ins_title_en.as_deref(), Some("Comprehensive"));
    }
}
