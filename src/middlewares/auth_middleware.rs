use axum::http::StatusCode;
use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use std::sync::Arc;
use tracing::warn;

use crate::model::user::Role;
use crate::util::jwt::{Claims, JwtTokenUtils, JwtTokenUtilsImpl};

pub struct AuthState {
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

impl AuthState {
    pub fn new(jwt_utils: Arc<JwtTokenUtilsImpl>) -> Self {
        AuthState { jwt_utils }
    }

    fn claims_from_request(&self, req: &Request<Body>) -> Result<Claims, StatusCode> {
        let auth_header = req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;
        let token = self
            .jwt_utils
            .extract_token_from_header(auth_header)
            .map_err(|_| StatusCode::UNAUTHORIZED)?;
        self.jwt_utils.validate_access_token(&token).map_err(|e| {
            warn!("Rejected access token: {}", e);
            StatusCode::UNAUTHORIZED
        })
    }

    async fn authorize(&self, mut req: Request<Body>, next: Next, required: Role) -> Result<Response, StatusCode> {
        let claims = self.claims_from_request(&req)?;
        if !self.jwt_utils.check_role_permission(&claims.role, required) {
            warn!("User {} with role {} denied {} route", claims.sub, claims.role, required.as_str());
            return Err(StatusCode::FORBIDDEN);
        }
        // Handlers read the caller from the request extensions.
        req.extensions_mut().insert(claims);
        Ok(next.run(req).await)
    }
}

/// Any logged-in user.
pub async fn tenant_auth(
    State(state): State<Arc<AuthState>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    state.authorize(req, next, Role::Tenant).await
}

pub async fn admin_auth(
    State(state): State<Arc<AuthState>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    state.authorize(req, next, Role::Admin).await
}
