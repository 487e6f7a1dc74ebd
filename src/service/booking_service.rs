use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{error, info, instrument, warn};

use crate::dto::booking_dto::CreateBookingRequest;
use crate::model::booking::{Booking, BookingStatus};
use crate::model::room::RoomStatus;
use crate::repository::booking_repo::BookingRepository;
use crate::repository::room_repo::RoomRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait BookingService: Send + Sync {
    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking, ServiceError>;
    async fn list_bookings(&self) -> Result<Vec<Booking>, ServiceError>;
}

pub struct BookingServiceImpl {
    pub booking_repo: Arc<dyn BookingRepository>,
    pub room_repo: Arc<dyn RoomRepository>,
}

impl BookingServiceImpl {
    pub fn new(booking_repo: Arc<dyn BookingRepository>, room_repo: Arc<dyn RoomRepository>) -> Self {
        Self { booking_repo, room_repo }
    }
}

#[async_trait]
impl BookingService for BookingServiceImpl {
    #[instrument(skip(self, request), fields(room_id = %request.room_id))]
    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking, ServiceError> {
        info!("Booking request received");
        let room_id = ObjectId::parse_str(request.room_id.trim())
            .map_err(|_| ServiceError::InvalidInput("Invalid room id".to_string()))?;
        let room = self.room_repo.get_by_id(room_id).await?;
        if room.status != RoomStatus::Vacant {
            warn!("Booking rejected, room {} is {}", room.room_number, room.status.as_str());
            return Err(ServiceError::Conflict(format!("Room {} is not available", room.room_number)));
        }

        let booking = Booking {
            id: None,
            room_id,
            room_number: room.room_number,
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            phone: request.phone.trim().to_string(),
            message: request.message,
            status: BookingStatus::Pending,
            created_at: None,
        };
        let res = self.booking_repo.insert(booking).await;
        match &res {
            Ok(_) => info!("Booking stored"),
            Err(e) => error!("Failed to store booking: {e}"),
        }
        Ok(res?)
    }

    #[instrument(skip(self))]
    async fn list_bookings(&self) -> Result<Vec<Booking>, ServiceError> {
        let res = self.booking_repo.list_newest_first().await;
        match &res {
            Ok(bookings) => info!("Fetched {} bookings", bookings.len()),
            Err(e) => error!("Failed to list bookings: {e}"),
        }
        Ok(res?)
    }
}
