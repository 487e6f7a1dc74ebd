use axum::{extract::{Json, Path, Query, State}, http::StatusCode, response::IntoResponse};
use std::sync::Arc;
use validator::Validate;

use super::{parse_object_id, JsonBody};
use crate::dto::room_dto::{CreateRoomRequest, RoomQuery, UpdateRoomStatusRequest};
use crate::model::room::RoomStatus;
use crate::service::room_service::{RoomService, RoomServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_rooms_handler(
    State(service): State<Arc<RoomServiceImpl>>,
    Query(query): Query<RoomQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    query.validate().map_err(HandlerError::validation)?;
    let status = query.status.as_deref().and_then(RoomStatus::parse);
    Ok(Json(service.list_rooms(status).await?))
}

pub async fn get_room_handler(
    State(service): State<Arc<RoomServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id)?;
    Ok(Json(service.get_room(id).await?))
}

pub async fn create_room_handler(
    State(service): State<Arc<RoomServiceImpl>>,
    JsonBody(payload): JsonBody<CreateRoomRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(HandlerError::validation)?;
    let room = service.create_room(payload).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

pub async fn update_room_status_handler(
    State(service): State<Arc<RoomServiceImpl>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateRoomStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id)?;
    payload.validate().map_err(HandlerError::validation)?;
    let status = RoomStatus::parse(&payload.status)
        .ok_or_else(|| HandlerError::bad_request("Status must be vacant or occupied"))?;
    Ok(Json(service.update_room_status(id, status).await?))
}
