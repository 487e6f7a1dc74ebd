use axum::{extract::{Extension, Json, State}, http::StatusCode, response::IntoResponse};
use std::sync::Arc;
use validator::Validate;

use super::JsonBody;

use crate::dto::chat_dto::{ChatHistoryResponse, PostMessageRequest};
use crate::service::chat_service::{ChatService, ChatServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn chat_history_handler(State(service): State<Arc<ChatServiceImpl>>) -> impl IntoResponse {
    Json(ChatHistoryResponse { messages: service.history().await })
}

pub async fn post_message_handler(
    State(service): State<Arc<ChatServiceImpl>>,
    Extension(claims): Extension<Claims>,
    JsonBody(payload): JsonBody<PostMessageRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(HandlerError::validation)?;
    let message = service.post_message(claims.sub, claims.identifier, payload.text).await?;
    Ok((StatusCode::CREATED, Json(message)))
}
