use serde::Deserialize;
use validator::Validate;

use super::{blank_as_none, not_blank};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBookingRequest {
    #[validate(custom(function = "not_blank", message = "Room is required"))]
    pub room_id: String,
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, max = 20, message = "Invalid phone number"))]
    pub phone: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub message: Option<String>,
}
