use crate::model::timestamp_now;
use crate::model::user::{Role, User};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use tracing::{error, info, instrument};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> RepositoryResult<User>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<User>>;
    async fn find_by_room_number(&self, room_number: &str) -> RepositoryResult<Option<User>>;
    async fn find_by_admin_id(&self, admin_id: &str) -> RepositoryResult<Option<User>>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        MongoUserRepository { collection: db.collection::<User>("users") }
    }

    /// Room numbers and admin ids are each unique when present.
    pub async fn ensure_indexes(&self) -> RepositoryResult<()> {
        for field in ["roomNumber", "adminId"] {
            let index = IndexModel::builder()
                .keys(doc! { field: 1 })
                .options(IndexOptions::builder().unique(true).sparse(true).build())
                .build();
            self.collection
                .create_index(index, None)
                .await
                .map_err(|e| RepositoryError::from_driver("Failed to create users index", e))?;
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, user), fields(role = user.role.as_str()))]
    async fn insert(&self, mut user: User) -> RepositoryResult<User> {
        user.id = Some(ObjectId::new());
        let now = timestamp_now();
        user.created_at = Some(now.clone());
        user.updated_at = Some(now);
        match self.collection.insert_one(user.clone(), None).await {
            Ok(_) => {
                info!("User inserted");
                Ok(user)
            }
            Err(e) => {
                error!("Failed to insert user: {}", e);
                Err(RepositoryError::from_driver("Failed to insert user", e))
            }
        }
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::from_driver("Failed to delete user", e))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("No user found to delete for ID: {}", id)));
        }
        info!("User deleted");
        Ok(())
    }

    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::from_driver("Failed to find user by id", e))
    }

    async fn find_by_room_number(&self, room_number: &str) -> RepositoryResult<Option<User>> {
        let filter = doc! { "roomNumber": room_number, "role": Role::Tenant.as_str() };
        self.collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::from_driver("Failed to find user by room number", e))
    }

    async fn find_by_admin_id(&self, admin_id: &str) -> RepositoryResult<Option<User>> {
        let filter = doc! { "adminId": admin_id, "role": Role::Admin.as_str() };
        self.collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::from_driver("Failed to find user by admin id", e))
    }
}
