use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Tenant,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tenant => "tenant",
            Role::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tenant" => Some(Role::Tenant),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Login record. A tenant is identified by its room number, an admin by its
/// admin id; exactly one of the two is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    // Absent rather than null so the sparse unique indexes skip it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
    pub password_hash: String,
    pub role: Role,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl User {
    pub fn tenant(room_number: String, password_hash: String) -> Self {
        User {
            id: None,
            room_number: Some(room_number),
            admin_id: None,
            password_hash,
            role: Role::Tenant,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn admin(admin_id: String, password_hash: String) -> Self {
        User {
            id: None,
            room_number: None,
            admin_id: Some(admin_id),
            password_hash,
            role: Role::Admin,
            created_at: None,
            updated_at: None,
        }
    }

    /// The login identifier matching the user's role.
    pub fn identifier(&self) -> &str {
        match self.role {
            Role::Tenant => self.room_number.as_deref().unwrap_or_default(),
            Role::Admin => self.admin_id.as_deref().unwrap_or_default(),
        }
    }
}
