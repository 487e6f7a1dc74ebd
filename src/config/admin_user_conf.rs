use std::env;
use serde::{Serialize, Deserialize};
use crate::config::ConfigError;

/// Credentials of the landlord account created on first start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserConfig {
    pub admin_id: String,
    pub password: String,
}

impl AdminUserConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let admin_id = env::var("ADMIN_ID").map_err(|_| ConfigError::EnvVarNotFound("ADMIN_ID".to_string()))?;
        let password = env::var("ADMIN_PASSWORD").map_err(|_| ConfigError::EnvVarNotFound("ADMIN_PASSWORD".to_string()))?;
        if admin_id.trim().is_empty() {
            return Err(ConfigError::ValidationError("ADMIN_ID cannot be empty".to_string()));
        }
        Ok(AdminUserConfig { admin_id: admin_id.trim().to_string(), password })
    }
}
