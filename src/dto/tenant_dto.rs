use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{blank_as_none, calendar_date, not_blank, optional_amount};

use crate::model::tenant::Tenant;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTenantRequest {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    #[serde(deserialize_with = "blank_as_none")]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub phone: Option<String>,
    #[validate(custom(function = "not_blank", message = "Room number is required"))]
    pub room_number: String,
    #[serde(deserialize_with = "optional_amount")]
    #[validate(required(message = "Rent amount is required"), range(min = 0.0, message = "Rent amount cannot be negative"))]
    pub rent_amount: Option<f64>,
    #[validate(custom(function = "calendar_date", message = "Move-in date must be YYYY-MM-DD"))]
    pub move_in_date: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub gender: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantResponse {
    pub success: bool,
    pub tenant: Tenant,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateTenantRequest {
        CreateTenantRequest {
            name: "Jane Wanjiku".to_string(),
            email: Some("jane@example.com".to_string()),
            phone: Some("0712345678".to_string()),
            room_number: "A1".to_string(),
            rent_amount: Some(8500.0),
            move_in_date: "2024-01-15".to_string(),
            gender: Some("female".to_string()),
            password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let req = CreateTenantRequest { password: "12345".to_string(), ..valid_request() };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_missing_fields_deserialize_to_invalid_request() {
        let req: CreateTenantRequest = serde_json::from_str(r#"{"name":"Jane"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("room_number"));
        assert!(fields.contains_key("rent_amount"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_blank_email_is_absent() {
        let req: CreateTenantRequest = serde_json::from_str(
            r#"{"name":"Jane","roomNumber":"A1","rentAmount":"8500","moveInDate":"2024-01-15","password":"secret1","email":"","phone":" "}"#,
        )
        .unwrap();
        assert_eq!(req.email, None);
        assert_eq!(req.phone, None);
        assert_eq!(req.rent_amount, Some(8500.0));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_negative_rent_and_bad_date_rejected() {
        let req = CreateTenantRequest {
            rent_amount: Some(-1.0),
            move_in_date: "next week".to_string(),
            ..valid_request()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rent_amount"));
        assert!(errors.field_errors().contains_key("move_in_date"));
    }
}
