use crate::model::timestamp_now;
use crate::model::update::Update;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::oid::ObjectId;
use futures::stream::StreamExt;
use mongodb::{Collection, Database};
use tracing::{error, info, instrument};

#[async_trait]
pub trait UpdateRepository: Send + Sync {
    async fn insert(&self, update: Update) -> RepositoryResult<Update>;
    /// All announcements in storage order
    async fn list_all(&self) -> RepositoryResult<Vec<Update>>;
}

pub struct MongoUpdateRepository {
    collection: Collection<Update>,
}

impl MongoUpdateRepository {
    pub fn new(db: &Database) -> Self {
        MongoUpdateRepository { collection: db.collection::<Update>("updates") }
    }
}

#[async_trait]
impl UpdateRepository for MongoUpdateRepository {
    #[instrument(skip(self, update), fields(title = %update.title))]
    async fn insert(&self, mut update: Update) -> RepositoryResult<Update> {
        update.id = Some(ObjectId::new());
        let now = timestamp_now();
        update.created_at = Some(now.clone());
        update.updated_at = Some(now);
        self.collection.insert_one(update.clone(), None).await.map_err(|e| {
            error!("Failed to insert update: {}", e);
            RepositoryError::from_driver("Failed to insert update", e)
        })?;
        info!("Update inserted");
        Ok(update)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepositoryResult<Vec<Update>> {
        let mut cursor = self
            .collection
            .find(None, None)
            .await
            .map_err(|e| RepositoryError::from_driver("Failed to list updates", e))?;
        let mut updates = Vec::new();
        while let Some(update) = cursor.next().await {
            let update = update.map_err(|e| {
                RepositoryError::serialization(format!("Failed to deserialize update: {}", e))
            })?;
            updates.push(update);
        }
        Ok(updates)
    }
}
