use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::update_handler::{create_update_handler, list_updates_handler};
use crate::middlewares::auth_middleware::{admin_auth, tenant_auth, AuthState};
use crate::service::update_service::UpdateServiceImpl;

pub fn update_router(service: Arc<UpdateServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    let members = Router::new()
        .route("/updates", get(list_updates_handler))
        .route_layer(middleware::from_fn_with_state(auth_state.clone(), tenant_auth));

    let admin = Router::new()
        .route("/updates", post(create_update_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, admin_auth));

    members.merge(admin).with_state(service)
}
