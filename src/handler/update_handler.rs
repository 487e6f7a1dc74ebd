use axum::{extract::{Json, State}, http::StatusCode, response::IntoResponse};
use std::sync::Arc;
use validator::Validate;

use super::JsonBody;

use crate::dto::update_dto::{CreateUpdateRequest, CreateUpdateResponse, UpdateResponse};
use crate::service::update_service::{UpdateService, UpdateServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_update_handler(
    State(service): State<Arc<UpdateServiceImpl>>,
    JsonBody(payload): JsonBody<CreateUpdateRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(HandlerError::validation)?;
    let data = service.create_update(payload).await?.into();
    Ok((
        StatusCode::CREATED,
        Json(CreateUpdateResponse { message: "Update posted successfully".to_string(), data }),
    ))
}

pub async fn list_updates_handler(
    State(service): State<Arc<UpdateServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let updates: Vec<UpdateResponse> = service.list_updates().await?.into_iter().map(UpdateResponse::from).collect();
    Ok(Json(updates))
}
