use axum::{extract::{Json, State}, http::StatusCode, response::IntoResponse};
use std::sync::Arc;
use validator::Validate;

use super::JsonBody;

use crate::dto::booking_dto::CreateBookingRequest;
use crate::service::booking_service::{BookingService, BookingServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_booking_handler(
    State(service): State<Arc<BookingServiceImpl>>,
    JsonBody(payload): JsonBody<CreateBookingRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(HandlerError::validation)?;
    let booking = service.create_booking(payload).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

pub async fn list_bookings_handler(
    State(service): State<Arc<BookingServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(service.list_bookings().await?))
}
