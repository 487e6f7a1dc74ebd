use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::{AdminUserConfig, AppConfig, JwtConfig, MongoConfig};
use crate::middlewares::auth_middleware::AuthState;
use crate::repository::booking_repo::{BookingRepository, MongoBookingRepository};
use crate::repository::mongo;
use crate::repository::room_repo::{MongoRoomRepository, RoomRepository};
use crate::repository::tenant_repo::{MongoTenantRepository, TenantRepository};
use crate::repository::update_repo::{MongoUpdateRepository, UpdateRepository};
use crate::repository::user_repo::{MongoUserRepository, UserRepository};
use crate::router::auth_router::auth_router;
use crate::router::booking_router::booking_router;
use crate::router::chat_router::chat_router;
use crate::router::rent_router::rent_router;
use crate::router::room_router::room_router;
use crate::router::tenant_router::tenant_router;
use crate::router::update_router::update_router;
use crate::service::auth_service::{AuthService, AuthServiceImpl};
use crate::service::booking_service::BookingServiceImpl;
use crate::service::chat_service::ChatServiceImpl;
use crate::service::rent_service::{PaymentSimulator, RentServiceImpl};
use crate::service::room_service::RoomServiceImpl;
use crate::service::tenant_service::TenantServiceImpl;
use crate::service::update_service::UpdateServiceImpl;
use crate::util::jwt::JwtTokenUtilsImpl;

/// Storage handles every service is built from.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub tenants: Arc<dyn TenantRepository>,
    pub updates: Arc<dyn UpdateRepository>,
    pub rooms: Arc<dyn RoomRepository>,
    pub bookings: Arc<dyn BookingRepository>,
}

pub struct Services {
    pub auth: Arc<AuthServiceImpl>,
    pub tenants: Arc<TenantServiceImpl>,
    pub updates: Arc<UpdateServiceImpl>,
    pub rent: Arc<RentServiceImpl>,
    pub chat: Arc<ChatServiceImpl>,
    pub rooms: Arc<RoomServiceImpl>,
    pub bookings: Arc<BookingServiceImpl>,
}

impl Services {
    pub fn new(
        repos: Repositories,
        jwt_utils: Arc<JwtTokenUtilsImpl>,
        config: &AppConfig,
        simulator: PaymentSimulator,
    ) -> Self {
        Services {
            auth: Arc::new(AuthServiceImpl::new(repos.users.clone(), jwt_utils)),
            tenants: Arc::new(TenantServiceImpl::new(
                repos.users.clone(),
                repos.tenants.clone(),
                repos.rooms.clone(),
            )),
            updates: Arc::new(UpdateServiceImpl::new(repos.updates.clone())),
            rent: Arc::new(RentServiceImpl::new(repos.tenants.clone(), simulator)),
            chat: Arc::new(ChatServiceImpl::new(
                repos.tenants.clone(),
                config.chat_reply_delay(),
                config.chat_history_limit,
            )),
            rooms: Arc::new(RoomServiceImpl::new(repos.rooms.clone())),
            bookings: Arc::new(BookingServiceImpl::new(repos.bookings, repos.rooms)),
        }
    }
}

/// Full HTTP surface: every API route under `/api` plus `/health`.
pub fn api_router(services: &Services, auth_state: Arc<AuthState>) -> Router {
    let api = Router::new()
        .merge(auth_router(services.auth.clone()))
        .merge(tenant_router(services.tenants.clone(), auth_state.clone()))
        .merge(update_router(services.updates.clone(), auth_state.clone()))
        .merge(rent_router(services.rent.clone(), auth_state.clone()))
        .merge(chat_router(services.chat.clone(), auth_state.clone()))
        .merge(room_router(services.rooms.clone(), auth_state.clone()))
        .merge(booking_router(services.bookings.clone(), auth_state));

    Router::new()
        .nest("/api", api)
        .route("/health", get(|| async { "OK" }))
}

pub struct App {
    config: AppConfig,
    router: Router,
    pub services: Services,
}

impl App {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config = AppConfig::from_env();
        let jwt_config = JwtConfig::from_env()?;
        let mongo_config = MongoConfig::from_env()?;

        let db = mongo::database(&mongo_config).await?;
        let users = MongoUserRepository::new(&db);
        let tenants = MongoTenantRepository::new(&db);
        let rooms = MongoRoomRepository::new(&db);
        users.ensure_indexes().await?;
        tenants.ensure_indexes().await?;
        rooms.ensure_indexes().await?;

        let repos = Repositories {
            users: Arc::new(users),
            tenants: Arc::new(tenants),
            updates: Arc::new(MongoUpdateRepository::new(&db)),
            rooms: Arc::new(rooms),
            bookings: Arc::new(MongoBookingRepository::new(&db)),
        };
        let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(jwt_config));
        let services = Services::new(repos, jwt_utils.clone(), &config, PaymentSimulator::new());
        let router = api_router(&services, Arc::new(AuthState::new(jwt_utils)));

        let app = App { config, router, services };
        app.create_first_admin_user().await;
        Ok(app)
    }

    pub async fn start(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = SocketAddr::new(self.config.host.parse()?, self.config.port);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("🚀 Server running at http://{}", addr);
        axum::serve(listener, self.router).await?;
        Ok(())
    }

    async fn create_first_admin_user(&self) {
        let admin_conf = match AdminUserConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!("Admin user config not loaded: {e}");
                return;
            }
        };
        match self.services.auth.ensure_admin(&admin_conf).await {
            Ok(true) => info!("First admin user created."),
            Ok(false) => {}
            Err(e) => error!("Failed to create admin user: {e}"),
        }
    }
}
