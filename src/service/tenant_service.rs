use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use crate::dto::parse_calendar_date;
use crate::dto::tenant_dto::{CreateTenantRequest, CreateTenantResponse};
use crate::model::room::RoomStatus;
use crate::model::tenant::Tenant;
use crate::model::timestamp_now;
use crate::model::user::User;
use crate::repository::repository_error::RepositoryError;
use crate::repository::room_repo::RoomRepository;
use crate::repository::tenant_repo::TenantRepository;
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;
use crate::util::password::{meets_min_length, PasswordUtils, PasswordUtilsImpl, MIN_PASSWORD_LENGTH};

#[async_trait]
pub trait TenantService: Send + Sync {
    /// Creates the tenant's login and profile for one room.
    async fn create_tenant(&self, request: CreateTenantRequest) -> Result<CreateTenantResponse, ServiceError>;
    async fn list_tenants(&self) -> Result<Vec<Tenant>, ServiceError>;
}

pub struct TenantServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
    pub tenant_repo: Arc<dyn TenantRepository>,
    pub room_repo: Arc<dyn RoomRepository>,
}

impl TenantServiceImpl {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        tenant_repo: Arc<dyn TenantRepository>,
        room_repo: Arc<dyn RoomRepository>,
    ) -> Self {
        Self { user_repo, tenant_repo, room_repo }
    }

    async fn ensure_room_free(&self, room_number: &str) -> Result<(), ServiceError> {
        if self.user_repo.find_by_room_number(room_number).await?.is_some() {
            warn!("Room already has a tenant login");
            return Err(ServiceError::Conflict("Room already registered".to_string()));
        }
        if self.tenant_repo.find_by_room_number(room_number).await?.is_some() {
            warn!("Room already has a tenant profile");
            return Err(ServiceError::Conflict("Room already occupied".to_string()));
        }
        Ok(())
    }

    async fn mark_room_occupied(&self, room_number: &str) {
        let room = match self.room_repo.find_by_room_number(room_number).await {
            Ok(Some(room)) => room,
            Ok(None) => return,
            Err(e) => {
                warn!("Could not look up room {}: {}", room_number, e);
                return;
            }
        };
        if room.status == RoomStatus::Occupied {
            return;
        }
        if let Some(id) = room.id {
            if let Err(e) = self.room_repo.update_status(id, RoomStatus::Occupied).await {
                warn!("Could not mark room {} occupied: {}", room_number, e);
            }
        }
    }
}

#[async_trait]
impl TenantService for TenantServiceImpl {
    #[instrument(skip(self, request), fields(room_number = %request.room_number))]
    async fn create_tenant(&self, request: CreateTenantRequest) -> Result<CreateTenantResponse, ServiceError> {
        info!("Creating tenant");
        if !meets_min_length(&request.password) {
            return Err(ServiceError::InvalidInput(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        let room_number = request.room_number.trim().to_string();
        if room_number.is_empty() {
            return Err(ServiceError::InvalidInput("Room number is required".to_string()));
        }
        let move_in_date = parse_calendar_date(&request.move_in_date)
            .ok_or_else(|| ServiceError::InvalidInput("Invalid move-in date".to_string()))?;
        let rent_amount = request
            .rent_amount
            .filter(|amount| *amount >= 0.0)
            .ok_or_else(|| ServiceError::InvalidInput("Invalid rent amount".to_string()))?;

        self.ensure_room_free(&room_number).await?;

        let hash = PasswordUtilsImpl::hash_password(&request.password)
            .map_err(|e| ServiceError::InternalError(format!("Password hash error: {}", e)))?;
        let user = self
            .user_repo
            .insert(User::tenant(room_number.clone(), hash))
            .await
            .map_err(|e| match e {
                // Lost a race with another registration for the same room.
                RepositoryError::AlreadyExists(_) => ServiceError::Conflict("Room already registered".to_string()),
                other => ServiceError::from(other),
            })?;
        let user_id = user
            .id
            .ok_or_else(|| ServiceError::InternalError("Inserted user has no id".to_string()))?;

        let tenant = Tenant {
            id: None,
            name: request.name.trim().to_string(),
            email: request.email,
            phone: request.phone,
            room_number: room_number.clone(),
            rent_amount,
            move_in_date: move_in_date.format("%Y-%m-%d").to_string(),
            gender: request.gender,
            last_payment: Some(timestamp_now()),
            created_at: None,
            updated_at: None,
        };

        let tenant = match self.tenant_repo.insert(tenant).await {
            Ok(tenant) => tenant,
            Err(e) => {
                error!("Failed to insert tenant profile, removing login {}: {}", user_id, e);
                if let Err(rollback) = self.user_repo.delete(user_id).await {
                    error!("Failed to remove login {} after tenant insert failure: {}", user_id, rollback);
                }
                return Err(match e {
                    RepositoryError::AlreadyExists(_) => ServiceError::Conflict("Room already occupied".to_string()),
                    other => ServiceError::from(other),
                });
            }
        };

        self.mark_room_occupied(&room_number).await;

        info!("Tenant created successfully");
        Ok(CreateTenantResponse {
            success: true,
            tenant,
            user_id: user_id.to_hex(),
        })
    }

    #[instrument(skip(self))]
    async fn list_tenants(&self) -> Result<Vec<Tenant>, ServiceError> {
        let res = self.tenant_repo.list().await;
        match &res {
            Ok(tenants) => info!("Fetched {} tenants", tenants.len()),
            Err(e) => error!("Failed to list tenants: {e}"),
        }
        Ok(res?)
    }
}
