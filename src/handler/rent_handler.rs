use axum::{extract::{Json, State}, response::IntoResponse};
use std::sync::Arc;

use crate::service::rent_service::{RentService, RentServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_payments_handler(
    State(service): State<Arc<RentServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(service.list_payments().await?))
}
