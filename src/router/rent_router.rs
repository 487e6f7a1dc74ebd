use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use crate::handler::rent_handler::list_payments_handler;
use crate::middlewares::auth_middleware::{admin_auth, AuthState};
use crate::service::rent_service::RentServiceImpl;

pub fn rent_router(service: Arc<RentServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/rent", get(list_payments_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, admin_auth))
        .with_state(service)
}
