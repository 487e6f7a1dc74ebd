use crate::model::booking::Booking;
use crate::model::timestamp_now;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};
use tracing::{error, info, instrument};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert(&self, booking: Booking) -> RepositoryResult<Booking>;
    async fn list_newest_first(&self) -> RepositoryResult<Vec<Booking>>;
}

pub struct MongoBookingRepository {
    collection: Collection<Booking>,
}

impl MongoBookingRepository {
    pub fn new(db: &Database) -> Self {
        MongoBookingRepository { collection: db.collection::<Booking>("bookings") }
    }
}

#[async_trait]
impl BookingRepository for MongoBookingRepository {
    #[instrument(skip(self, booking), fields(room_number = %booking.room_number))]
    async fn insert(&self, mut booking: Booking) -> RepositoryResult<Booking> {
        booking.id = Some(ObjectId::new());
        booking.created_at = Some(timestamp_now());
        match self.collection.insert_one(booking.clone(), None).await {
            Ok(_) => {
                info!("Booking inserted");
                Ok(booking)
            }
            Err(e) => {
                error!("Failed to insert booking: {}", e);
                Err(RepositoryError::from_driver("Failed to insert booking", e))
            }
        }
    }

    async fn list_newest_first(&self) -> RepositoryResult<Vec<Booking>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let mut cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::from_driver("Failed to list bookings", e))?;
        let mut bookings = Vec::new();
        while let Some(booking) = cursor.next().await {
            match booking {
                Ok(b) => bookings.push(b),
                Err(e) => return Err(RepositoryError::serialization(format!("Failed to deserialize booking: {}", e))),
            }
        }
        Ok(bookings)
    }
}
