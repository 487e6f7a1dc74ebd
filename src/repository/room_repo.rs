use crate::model::room::{Room, RoomStatus};
use crate::model::timestamp_now;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::StreamExt;
use mongodb::options::{FindOptions, IndexOptions};
use mongodb::{Collection, Database, IndexModel};
use tracing::{error, info, instrument};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn insert(&self, room: Room) -> RepositoryResult<Room>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Room>;
    async fn find_by_room_number(&self, room_number: &str) -> RepositoryResult<Option<Room>>;
    async fn list(&self, status: Option<RoomStatus>) -> RepositoryResult<Vec<Room>>;
    async fn update_status(&self, id: ObjectId, status: RoomStatus) -> RepositoryResult<Room>;
}

pub struct MongoRoomRepository {
    collection: Collection<Room>,
}

impl MongoRoomRepository {
    pub fn new(db: &Database) -> Self {
        MongoRoomRepository { collection: db.collection::<Room>("rooms") }
    }

    pub async fn ensure_indexes(&self) -> RepositoryResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "roomNumber": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection
            .create_index(index, None)
            .await
            .map_err(|e| RepositoryError::from_driver("Failed to create rooms index", e))?;
        Ok(())
    }
}

#[async_trait]
impl RoomRepository for MongoRoomRepository {
    #[instrument(skip(self, room), fields(room_number = %room.room_number))]
    async fn insert(&self, mut room: Room) -> RepositoryResult<Room> {
        room.id = Some(ObjectId::new());
        let now = timestamp_now();
        room.created_at = Some(now.clone());
        room.updated_at = Some(now);
        self.collection.insert_one(room.clone(), None).await.map_err(|e| {
            error!("Failed to insert room: {}", e);
            RepositoryError::from_driver("Failed to insert room", e)
        })?;
        info!("Room inserted");
        Ok(room)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Room> {
        match self.collection.find_one(doc! { "_id": id }, None).await {
            Ok(Some(room)) => Ok(room),
            Ok(None) => Err(RepositoryError::not_found(format!("Room not found for ID: {}", id))),
            Err(e) => Err(RepositoryError::from_driver("Failed to fetch room", e)),
        }
    }

    async fn find_by_room_number(&self, room_number: &str) -> RepositoryResult<Option<Room>> {
        self.collection
            .find_one(doc! { "roomNumber": room_number }, None)
            .await
            .map_err(|e| RepositoryError::from_driver("Failed to find room by number", e))
    }

    #[instrument(skip(self))]
    async fn list(&self, status: Option<RoomStatus>) -> RepositoryResult<Vec<Room>> {
        let filter: Document = match status {
            Some(status) => doc! { "status": status.as_str() },
            None => doc! {},
        };
        let options = FindOptions::builder().sort(doc! { "roomNumber": 1 }).build();
        let mut cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::from_driver("Failed to list rooms", e))?;
        let mut rooms = Vec::new();
        while let Some(room) = cursor.next().await {
            let room = room.map_err(|e| RepositoryError::serialization(format!("Failed to deserialize room: {}", e)))?;
            rooms.push(room);
        }
        Ok(rooms)
    }

    #[instrument(skip(self), fields(id = %id, status = status.as_str()))]
    async fn update_status(&self, id: ObjectId, status: RoomStatus) -> RepositoryResult<Room> {
        let update = doc! { "$set": { "status": status.as_str(), "updatedAt": timestamp_now() } };
        let result = self
            .collection
            .update_one(doc! { "_id": id }, update, None)
            .await
            .map_err(|e| RepositoryError::from_driver("Failed to update room status", e))?;
        if result.matched_count == 0 {
            error!("No room found to update status for ID: {}", id);
            return Err(RepositoryError::not_found(format!("No room found to update for ID: {}", id)));
        }
        info!("Room status updated");
        self.get_by_id(id).await
    }
}
