#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use bson::oid::ObjectId;
use serde_json::Value;
use tower::ServiceExt;

use rentals_backend::app::app::{api_router, Repositories, Services};
use rentals_backend::config::{AppConfig, JwtConfig};
use rentals_backend::middlewares::auth_middleware::AuthState;
use rentals_backend::model::booking::Booking;
use rentals_backend::model::room::{Room, RoomStatus};
use rentals_backend::model::tenant::Tenant;
use rentals_backend::model::timestamp_now;
use rentals_backend::model::update::Update;
use rentals_backend::model::user::{Role, User};
use rentals_backend::repository::booking_repo::BookingRepository;
use rentals_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use rentals_backend::repository::room_repo::RoomRepository;
use rentals_backend::repository::tenant_repo::TenantRepository;
use rentals_backend::repository::update_repo::UpdateRepository;
use rentals_backend::repository::user_repo::UserRepository;
use rentals_backend::service::rent_service::PaymentSimulator;
use rentals_backend::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};

// In-memory stand-ins for the MongoDB repositories. They enforce the same
// unique keys as the real indexes.

#[derive(Default)]
pub struct InMemoryUserRepository {
    pub users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, mut user: User) -> RepositoryResult<User> {
        let mut users = self.users.lock().unwrap();
        let clash = users.iter().any(|u| {
            (user.room_number.is_some() && u.room_number == user.room_number)
                || (user.admin_id.is_some() && u.admin_id == user.admin_id)
        });
        if clash {
            return Err(RepositoryError::already_exists("users: duplicate key"));
        }
        user.id = Some(ObjectId::new());
        user.created_at = Some(timestamp_now());
        user.updated_at = user.created_at.clone();
        users.push(user.clone());
        Ok(user)
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != Some(id));
        if users.len() == before {
            return Err(RepositoryError::not_found("user"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_room_number(&self, room_number: &str) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.role == Role::Tenant && u.room_number.as_deref() == Some(room_number))
            .cloned())
    }

    async fn find_by_admin_id(&self, admin_id: &str) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.role == Role::Admin && u.admin_id.as_deref() == Some(admin_id))
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryTenantRepository {
    pub tenants: Mutex<Vec<Tenant>>,
    /// Makes every insert fail with a database error.
    pub fail_inserts: AtomicBool,
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn insert(&self, mut tenant: Tenant) -> RepositoryResult<Tenant> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(RepositoryError::database("tenants: write failed"));
        }
        let mut tenants = self.tenants.lock().unwrap();
        if tenants.iter().any(|t| t.room_number == tenant.room_number) {
            return Err(RepositoryError::already_exists("tenants: duplicate key"));
        }
        tenant.id = Some(ObjectId::new());
        tenant.created_at = Some(timestamp_now());
        tenant.updated_at = tenant.created_at.clone();
        tenants.push(tenant.clone());
        Ok(tenant)
    }

    async fn find_by_room_number(&self, room_number: &str) -> RepositoryResult<Option<Tenant>> {
        Ok(self.tenants.lock().unwrap().iter().find(|t| t.room_number == room_number).cloned())
    }

    async fn list(&self) -> RepositoryResult<Vec<Tenant>> {
        let mut tenants = self.tenants.lock().unwrap().clone();
        tenants.sort_by(|a, b| a.room_number.cmp(&b.room_number));
        Ok(tenants)
    }
}

#[derive(Default)]
pub struct InMemoryUpdateRepository {
    pub updates: Mutex<Vec<Update>>,
}

impl InMemoryUpdateRepository {
    /// Stores an announcement keeping its own `createdAt`.
    pub fn seed(&self, title: &str, created_at: &str) {
        self.updates.lock().unwrap().push(Update {
            id: Some(ObjectId::new()),
            title: title.to_string(),
            description: format!("{} details", title),
            created_at: Some(created_at.to_string()),
            updated_at: Some(created_at.to_string()),
        });
    }
}

#[async_trait]
impl UpdateRepository for InMemoryUpdateRepository {
    async fn insert(&self, mut update: Update) -> RepositoryResult<Update> {
        update.id = Some(ObjectId::new());
        update.created_at = Some(timestamp_now());
        update.updated_at = update.created_at.clone();
        self.updates.lock().unwrap().push(update.clone());
        Ok(update)
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Update>> {
        Ok(self.updates.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryRoomRepository {
    pub rooms: Mutex<Vec<Room>>,
}

impl InMemoryRoomRepository {
    pub fn seed(&self, room_number: &str, status: RoomStatus) -> ObjectId {
        let id = ObjectId::new();
        self.rooms.lock().unwrap().push(Room {
            id: Some(id),
            room_number: room_number.to_string(),
            title: format!("Room {}", room_number),
            description: "Self-contained bedsitter".to_string(),
            price: 8000.0,
            features: vec!["Wi-Fi".to_string()],
            status,
            created_at: Some(timestamp_now()),
            updated_at: Some(timestamp_now()),
        });
        id
    }

    pub fn status_of(&self, room_number: &str) -> Option<RoomStatus> {
        self.rooms
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.room_number == room_number)
            .map(|r| r.status)
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn insert(&self, mut room: Room) -> RepositoryResult<Room> {
        let mut rooms = self.rooms.lock().unwrap();
        if rooms.iter().any(|r| r.room_number == room.room_number) {
            return Err(RepositoryError::already_exists("rooms: duplicate key"));
        }
        room.id = Some(ObjectId::new());
        room.created_at = Some(timestamp_now());
        room.updated_at = room.created_at.clone();
        rooms.push(room.clone());
        Ok(room)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Room> {
        self.rooms
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == Some(id))
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("Room not found for ID: {}", id)))
    }

    async fn find_by_room_number(&self, room_number: &str) -> RepositoryResult<Option<Room>> {
        Ok(self.rooms.lock().unwrap().iter().find(|r| r.room_number == room_number).cloned())
    }

    async fn list(&self, status: Option<RoomStatus>) -> RepositoryResult<Vec<Room>> {
        let mut rooms: Vec<Room> = self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .cloned()
            .collect();
        rooms.sort_by(|a, b| a.room_number.cmp(&b.room_number));
        Ok(rooms)
    }

    async fn update_status(&self, id: ObjectId, status: RoomStatus) -> RepositoryResult<Room> {
        let mut rooms = self.rooms.lock().unwrap();
        let room = rooms
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| RepositoryError::not_found(format!("No room found to update for ID: {}", id)))?;
        room.status = status;
        room.updated_at = Some(timestamp_now());
        Ok(room.clone())
    }
}

#[derive(Default)]
pub struct InMemoryBookingRepository {
    pub bookings: Mutex<Vec<Booking>>,
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn insert(&self, mut booking: Booking) -> RepositoryResult<Booking> {
        booking.id = Some(ObjectId::new());
        booking.created_at = Some(timestamp_now());
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(booking)
    }

    async fn list_newest_first(&self) -> RepositoryResult<Vec<Booking>> {
        Ok(self.bookings.lock().unwrap().iter().rev().cloned().collect())
    }
}

pub struct TestApp {
    pub router: Router,
    pub services: Services,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
    pub users: Arc<InMemoryUserRepository>,
    pub tenants: Arc<InMemoryTenantRepository>,
    pub updates: Arc<InMemoryUpdateRepository>,
    pub rooms: Arc<InMemoryRoomRepository>,
    pub bookings: Arc<InMemoryBookingRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let users = Arc::new(InMemoryUserRepository::default());
        let tenants = Arc::new(InMemoryTenantRepository::default());
        let updates = Arc::new(InMemoryUpdateRepository::default());
        let rooms = Arc::new(InMemoryRoomRepository::default());
        let bookings = Arc::new(InMemoryBookingRepository::default());
        let repos = Repositories {
            users: users.clone(),
            tenants: tenants.clone(),
            updates: updates.clone(),
            rooms: rooms.clone(),
            bookings: bookings.clone(),
        };
        let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(JwtConfig::default()));
        let services = Services::new(repos, jwt_utils.clone(), &config, PaymentSimulator::seeded(2024));
        let router = api_router(&services, Arc::new(AuthState::new(jwt_utils.clone())));
        TestApp { router, services, jwt_utils, users, tenants, updates, rooms, bookings }
    }

    pub fn admin_token(&self) -> String {
        self.token_for(&ObjectId::new().to_hex(), "landlord", Role::Admin)
    }

    pub fn tenant_token(&self, room_number: &str) -> String {
        self.token_for(&ObjectId::new().to_hex(), room_number, Role::Tenant)
    }

    pub fn token_for(&self, user_id: &str, identifier: &str, role: Role) -> String {
        self.jwt_utils
            .generate_token_pair(user_id, identifier, role)
            .expect("token pair")
            .access_token
    }

    pub async fn send(&self, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        self.send_raw(method, uri, token, body.map(|body| body.to_string())).await
    }

    /// Sends `body` verbatim as `application/json`, well-formed or not.
    pub async fn send_raw(&self, method: &str, uri: &str, token: Option<&str>, body: Option<String>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}

pub fn tenant_body(room_number: &str, password: &str) -> Value {
    serde_json::json!({
        "name": format!("Tenant {}", room_number),
        "email": "tenant@example.com",
        "phone": "0712345678",
        "roomNumber": room_number,
        "rentAmount": 8500,
        "moveInDate": "2024-02-01",
        "gender": "female",
        "password": password,
    })
}
