use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Vacant,
    Occupied,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Vacant => "vacant",
            RoomStatus::Occupied => "occupied",
        }
    }

    pub fn parse(value: &str) -> Option<RoomStatus> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vacant" => Some(RoomStatus::Vacant),
            "occupied" => Some(RoomStatus::Occupied),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub room_number: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
    pub status: RoomStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
