use axum::{extract::{Json, State}, response::IntoResponse};
use std::sync::Arc;
use validator::Validate;

use super::JsonBody;

use crate::dto::auth_dto::{LoginRequest, RefreshTokenRequest};
use crate::model::user::Role;
use crate::service::auth_service::{AuthService, AuthServiceImpl};
use crate::util::error::HandlerError;

pub async fn login_handler(
    State(service): State<Arc<AuthServiceImpl>>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(HandlerError::validation)?;
    let role = Role::parse(&payload.role).ok_or_else(|| HandlerError::bad_request("Role must be tenant or admin"))?;
    let res = service.login(payload.identifier, role, payload.password).await?;
    Ok(Json(res))
}

pub async fn refresh_token_handler(
    State(service): State<Arc<AuthServiceImpl>>,
    JsonBody(payload): JsonBody<RefreshTokenRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    // Left to the token check so any unusable token is a 401.
    let res = service.refresh_token(payload.refresh_token).await?;
    Ok(Json(res))
}
