use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{known_role, not_blank};

use crate::model::user::Role;
use crate::util::jwt::TokenPair;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    /// Room number for tenants, admin id for admins
    #[validate(custom(function = "not_blank", message = "Identifier is required"))]
    pub identifier: String,
    #[validate(custom(function = "known_role", message = "Role must be tenant or admin"))]
    pub role: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

impl From<TokenPair> for AuthTokens {
    fn from(pair: TokenPair) -> Self {
        AuthTokens {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_in: pair.expires_in,
            token_type: pair.token_type,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: Option<ObjectId>,
    pub role: Role,
    pub identifier: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user: UserSummary,
    pub tokens: AuthTokens,
}
