use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{error, info, instrument};

use crate::dto::room_dto::CreateRoomRequest;
use crate::model::room::{Room, RoomStatus};
use crate::repository::repository_error::RepositoryError;
use crate::repository::room_repo::RoomRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait RoomService: Send + Sync {
    async fn create_room(&self, request: CreateRoomRequest) -> Result<Room, ServiceError>;
    async fn get_room(&self, id: ObjectId) -> Result<Room, ServiceError>;
    async fn list_rooms(&self, status: Option<RoomStatus>) -> Result<Vec<Room>, ServiceError>;
    async fn update_room_status(&self, id: ObjectId, status: RoomStatus) -> Result<Room, ServiceError>;
}

pub struct RoomServiceImpl {
    pub room_repo: Arc<dyn RoomRepository>,
}

impl RoomServiceImpl {
    pub fn new(room_repo: Arc<dyn RoomRepository>) -> Self {
        Self { room_repo }
    }
}

#[async_trait]
impl RoomService for RoomServiceImpl {
    #[instrument(skip(self, request), fields(room_number = %request.room_number))]
    async fn create_room(&self, request: CreateRoomRequest) -> Result<Room, ServiceError> {
        info!("Creating room");
        let room_number = request.room_number.trim().to_string();
        if self.room_repo.find_by_room_number(&room_number).await?.is_some() {
            return Err(ServiceError::Conflict(format!("Room {} already exists", room_number)));
        }
        let price = request
            .price
            .filter(|price| *price >= 0.0)
            .ok_or_else(|| ServiceError::InvalidInput("Invalid price".to_string()))?;
        let room = Room {
            id: None,
            room_number,
            title: request.title.trim().to_string(),
            description: request.description.trim().to_string(),
            price,
            features: request
                .features
                .into_iter()
                .map(|feature| feature.trim().to_string())
                .filter(|feature| !feature.is_empty())
                .collect(),
            status: RoomStatus::Vacant,
            created_at: None,
            updated_at: None,
        };
        let res = self.room_repo.insert(room).await;
        match &res {
            Ok(_) => info!("Room created"),
            Err(e) => error!("Failed to create room: {e}"),
        }
        res.map_err(|e| match e {
            RepositoryError::AlreadyExists(_) => ServiceError::Conflict("Room already exists".to_string()),
            other => ServiceError::from(other),
        })
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_room(&self, id: ObjectId) -> Result<Room, ServiceError> {
        Ok(self.room_repo.get_by_id(id).await?)
    }

    #[instrument(skip(self))]
    async fn list_rooms(&self, status: Option<RoomStatus>) -> Result<Vec<Room>, ServiceError> {
        let res = self.room_repo.list(status).await;
        match &res {
            Ok(rooms) => info!("Fetched {} rooms", rooms.len()),
            Err(e) => error!("Failed to list rooms: {e}"),
        }
        Ok(res?)
    }

    #[instrument(skip(self), fields(id = %id, status = status.as_str()))]
    async fn update_room_status(&self, id: ObjectId, status: RoomStatus) -> Result<Room, ServiceError> {
        let res = self.room_repo.update_status(id, status).await;
        match &res {
            Ok(_) => info!("Room status updated"),
            Err(e) => error!("Failed to update room status: {e}"),
        }
        Ok(res?)
    }
}
