use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::booking_handler::{create_booking_handler, list_bookings_handler};
use crate::middlewares::auth_middleware::{admin_auth, AuthState};
use crate::service::booking_service::BookingServiceImpl;

pub fn booking_router(service: Arc<BookingServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    let public = Router::new().route("/bookings", post(create_booking_handler));

    let admin = Router::new()
        .route("/bookings", get(list_bookings_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, admin_auth));

    public.merge(admin).with_state(service)
}
