use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub room_number: String,
    pub rent_amount: f64,
    /// Calendar date, `YYYY-MM-DD`
    pub move_in_date: String,
    pub gender: Option<String>,
    pub last_payment: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
