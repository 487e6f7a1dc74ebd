use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument};

use crate::dto::update_dto::CreateUpdateRequest;
use crate::model::update::Update;
use crate::repository::update_repo::UpdateRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait UpdateService: Send + Sync {
    async fn create_update(&self, request: CreateUpdateRequest) -> Result<Update, ServiceError>;
    async fn list_updates(&self) -> Result<Vec<Update>, ServiceError>;
}

pub struct UpdateServiceImpl {
    pub update_repo: Arc<dyn UpdateRepository>,
}

impl UpdateServiceImpl {
    pub fn new(update_repo: Arc<dyn UpdateRepository>) -> Self {
        Self { update_repo }
    }
}

#[async_trait]
impl UpdateService for UpdateServiceImpl {
    #[instrument(skip(self, request), fields(title = %request.title))]
    async fn create_update(&self, request: CreateUpdateRequest) -> Result<Update, ServiceError> {
        info!("Posting announcement");
        let update = Update {
            id: None,
            title: request.title.trim().to_string(),
            description: request.description.trim().to_string(),
            created_at: None,
            updated_at: None,
        };
        let res = self.update_repo.insert(update).await;
        match &res {
            Ok(_) => info!("Announcement posted"),
            Err(e) => error!("Failed to post announcement: {e}"),
        }
        Ok(res?)
    }

    #[instrument(skip(self))]
    async fn list_updates(&self) -> Result<Vec<Update>, ServiceError> {
        let res = self.update_repo.list_all().await;
        match &res {
            Ok(updates) => info!("Fetched {} announcements", updates.len()),
            Err(e) => error!("Failed to list announcements: {e}"),
        }
        let mut updates = res?;
        // Timestamps are fixed-width RFC 3339, so string order is time order.
        updates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(updates)
    }
}
