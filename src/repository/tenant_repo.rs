use crate::model::tenant::Tenant;
use crate::model::timestamp_now;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::options::{FindOptions, IndexOptions};
use mongodb::{Collection, Database, IndexModel};
use tracing::{error, info, instrument};

#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn insert(&self, tenant: Tenant) -> RepositoryResult<Tenant>;
    async fn find_by_room_number(&self, room_number: &str) -> RepositoryResult<Option<Tenant>>;
    async fn list(&self) -> RepositoryResult<Vec<Tenant>>;
}

pub struct MongoTenantRepository {
    collection: Collection<Tenant>,
}

impl MongoTenantRepository {
    pub fn new(db: &Database) -> Self {
        MongoTenantRepository { collection: db.collection::<Tenant>("tenants") }
    }

    pub async fn ensure_indexes(&self) -> RepositoryResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "roomNumber": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection
            .create_index(index, None)
            .await
            .map_err(|e| RepositoryError::from_driver("Failed to create tenants index", e))?;
        Ok(())
    }
}

#[async_trait]
impl TenantRepository for MongoTenantRepository {
    #[instrument(skip(self, tenant), fields(room_number = %tenant.room_number))]
    async fn insert(&self, mut tenant: Tenant) -> RepositoryResult<Tenant> {
        tenant.id = Some(ObjectId::new());
        let now = timestamp_now();
        tenant.created_at = Some(now.clone());
        tenant.updated_at = Some(now);
        match self.collection.insert_one(tenant.clone(), None).await {
            Ok(_) => {
                info!("Tenant inserted");
                Ok(tenant)
            }
            Err(e) => {
                error!("Failed to insert tenant: {}", e);
                Err(RepositoryError::from_driver("Failed to insert tenant", e))
            }
        }
    }

    async fn find_by_room_number(&self, room_number: &str) -> RepositoryResult<Option<Tenant>> {
        self.collection
            .find_one(doc! { "roomNumber": room_number }, None)
            .await
            .map_err(|e| RepositoryError::from_driver("Failed to find tenant by room number", e))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Tenant>> {
        let options = FindOptions::builder().sort(doc! { "roomNumber": 1 }).build();
        let mut cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::from_driver("Failed to list tenants", e))?;
        let mut tenants = Vec::new();
        while let Some(tenant) = cursor.next().await {
            match tenant {
                Ok(t) => tenants.push(t),
                Err(e) => {
                    error!("Failed to deserialize tenant: {}", e);
                    return Err(RepositoryError::serialization(format!("Failed to deserialize tenant: {}", e)));
                }
            }
        }
        info!("Fetched {} tenants", tenants.len());
        Ok(tenants)
    }
}
