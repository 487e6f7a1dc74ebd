use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::chat_handler::{chat_history_handler, post_message_handler};
use crate::middlewares::auth_middleware::{tenant_auth, AuthState};
use crate::service::chat_service::ChatServiceImpl;

pub fn chat_router(service: Arc<ChatServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/chat", get(chat_history_handler))
        .route("/chat/messages", post(post_message_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, tenant_auth))
        .with_state(service)
}
