use serde::Deserialize;
use validator::Validate;

use super::{known_room_status, not_blank, optional_amount};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRoomRequest {
    #[validate(custom(function = "not_blank", message = "Room number is required"))]
    pub room_number: String,
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "optional_amount")]
    #[validate(required(message = "Price is required"), range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateRoomStatusRequest {
    #[validate(custom(function = "known_room_status", message = "Status must be vacant or occupied"))]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RoomQuery {
    #[validate(custom(function = "known_room_status", message = "Status must be vacant or occupied"))]
    pub status: Option<String>,
}
