use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;

use crate::model::chat::ChatMessage;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct PostMessageRequest {
    #[validate(custom(function = "not_blank", message = "Message text is required"))]
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatMessage>,
}
