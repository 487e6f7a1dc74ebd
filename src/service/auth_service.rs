use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{error, info, instrument, warn};

use crate::config::AdminUserConfig;
use crate::dto::auth_dto::{AuthTokens, LoginResponse, UserSummary};
use crate::model::user::{Role, User};
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;
use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};
use crate::util::password::{meets_min_length, PasswordUtils, PasswordUtilsImpl, MIN_PASSWORD_LENGTH};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, identifier: String, role: Role, password: String) -> Result<LoginResponse, ServiceError>;
    async fn refresh_token(&self, refresh_token: String) -> Result<AuthTokens, ServiceError>;
    /// Creates the configured admin if it does not exist yet. Returns whether
    /// a new account was written.
    async fn ensure_admin(&self, admin: &AdminUserConfig) -> Result<bool, ServiceError>;
}

pub struct AuthServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

impl AuthServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>, jwt_utils: Arc<JwtTokenUtilsImpl>) -> Self {
        Self { user_repo, jwt_utils }
    }

    async fn find_user(&self, identifier: &str, role: Role) -> Result<Option<User>, ServiceError> {
        let found = match role {
            Role::Tenant => self.user_repo.find_by_room_number(identifier).await,
            Role::Admin => self.user_repo.find_by_admin_id(identifier).await,
        };
        Ok(found?)
    }

    fn issue_tokens(&self, user: &User) -> Result<AuthTokens, ServiceError> {
        let user_id = user.id.map(|id| id.to_hex()).unwrap_or_default();
        self.jwt_utils
            .generate_token_pair(&user_id, user.identifier(), user.role)
            .map(AuthTokens::from)
            .map_err(|e| ServiceError::InternalError(format!("JWT error: {}", e)))
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    #[instrument(skip(self, password), fields(identifier = %identifier, role = role.as_str()))]
    async fn login(&self, identifier: String, role: Role, password: String) -> Result<LoginResponse, ServiceError> {
        info!("Login attempt");
        let user = match self.find_user(identifier.trim(), role).await? {
            Some(user) => user,
            None => {
                warn!("No user found for login");
                return Err(ServiceError::Unauthorized(INVALID_CREDENTIALS.to_string()));
            }
        };

        let valid = PasswordUtilsImpl::verify_password(&password, &user.password_hash).map_err(|e| {
            error!("Stored password hash could not be checked: {}", e);
            ServiceError::InternalError(format!("Password verify error: {}", e))
        })?;
        if !valid {
            warn!("Invalid password");
            return Err(ServiceError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let tokens = self.issue_tokens(&user)?;
        info!("User logged in successfully");
        Ok(LoginResponse {
            user: UserSummary {
                id: user.id,
                role: user.role,
                identifier: user.identifier().to_string(),
            },
            tokens,
        })
    }

    #[instrument(skip(self, refresh_token))]
    async fn refresh_token(&self, refresh_token: String) -> Result<AuthTokens, ServiceError> {
        info!("Refreshing token");
        let claims = self.jwt_utils.validate_refresh_token(&refresh_token).map_err(|e| {
            warn!("Rejected refresh token: {}", e);
            ServiceError::Unauthorized(format!("Invalid refresh token: {}", e))
        })?;

        let user_id = ObjectId::parse_str(&claims.sub)
            .map_err(|_| ServiceError::Unauthorized("Invalid refresh token subject".to_string()))?;
        // The account may have been removed since the token was issued.
        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| ServiceError::Unauthorized("User no longer exists".to_string()))?;

        let tokens = self.issue_tokens(&user)?;
        info!("Token refreshed successfully");
        Ok(tokens)
    }

    #[instrument(skip(self, admin), fields(admin_id = %admin.admin_id))]
    async fn ensure_admin(&self, admin: &AdminUserConfig) -> Result<bool, ServiceError> {
        if self.user_repo.find_by_admin_id(&admin.admin_id).await?.is_some() {
            info!("Admin user already exists, skipping creation");
            return Ok(false);
        }
        if !meets_min_length(&admin.password) {
            return Err(ServiceError::InvalidInput(format!(
                "Admin password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let hash = PasswordUtilsImpl::hash_password(&admin.password)
            .map_err(|e| ServiceError::InternalError(format!("Password hash error: {}", e)))?;
        let res = self.user_repo.insert(User::admin(admin.admin_id.clone(), hash)).await;
        match &res {
            Ok(_) => info!("First admin user created"),
            Err(e) => error!("Failed to create admin user: {e}"),
        }
        res?;
        Ok(true)
    }
}
