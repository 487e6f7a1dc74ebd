use axum::{extract::{Json, State}, http::StatusCode, response::IntoResponse};
use std::sync::Arc;
use validator::Validate;

use super::JsonBody;

use crate::dto::tenant_dto::CreateTenantRequest;
use crate::service::tenant_service::{TenantService, TenantServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_tenant_handler(
    State(service): State<Arc<TenantServiceImpl>>,
    JsonBody(payload): JsonBody<CreateTenantRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(HandlerError::validation)?;
    let res = service.create_tenant(payload).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn list_tenants_handler(
    State(service): State<Arc<TenantServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let tenants = service.list_tenants().await?;
    Ok(Json(tenants))
}
