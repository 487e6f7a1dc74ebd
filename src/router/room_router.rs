use axum::{middleware, routing::{get, post, put}, Router};
use std::sync::Arc;

use crate::handler::room_handler::{
    create_room_handler,
    get_room_handler,
    list_rooms_handler,
    update_room_status_handler,
};
use crate::middlewares::auth_middleware::{admin_auth, AuthState};
use crate::service::room_service::RoomServiceImpl;

pub fn room_router(service: Arc<RoomServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    // Public listing for the booking page
    let public = Router::new()
        .route("/rooms", get(list_rooms_handler))
        .route("/rooms/{id}", get(get_room_handler));

    let admin = Router::new()
        .route("/rooms", post(create_room_handler))
        .route("/rooms/{id}/status", put(update_room_status_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, admin_auth));

    public.merge(admin).with_state(service)
}
