use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;

use crate::model::update::Update;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateUpdateRequest {
    /// Older clients send the title as `update`.
    #[serde(alias = "update")]
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,
}

/// Announcement as returned to clients; the title is repeated as `update`
/// for clients that still read that field.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    #[serde(flatten)]
    pub announcement: Update,
    pub update: String,
}

impl From<Update> for UpdateResponse {
    fn from(announcement: Update) -> Self {
        let update = announcement.title.clone();
        UpdateResponse { announcement, update }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUpdateResponse {
    pub message: String,
    pub data: UpdateResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_alias_accepted() {
        let req: CreateUpdateRequest =
            serde_json::from_str(r#"{"update":"Water outage","description":"Saturday 9-12"}"#).unwrap();
        assert_eq!(req.title, "Water outage");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_response_repeats_title_as_update() {
        let response = UpdateResponse::from(Update {
            id: None,
            title: "Water outage".to_string(),
            description: "Saturday 9-12".to_string(),
            created_at: Some("2024-10-01T08:00:00.000Z".to_string()),
            updated_at: None,
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["title"], "Water outage");
        assert_eq!(value["update"], "Water outage");
        assert_eq!(value["createdAt"], "2024-10-01T08:00:00.000Z");
    }

    #[test]
    fn test_blank_description_rejected() {
        let req: CreateUpdateRequest = serde_json::from_str(r#"{"title":"Notice","description":"  "}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
