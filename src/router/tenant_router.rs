use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::tenant_handler::{create_tenant_handler, list_tenants_handler};
use crate::middlewares::auth_middleware::{admin_auth, tenant_auth, AuthState};
use crate::service::tenant_service::TenantServiceImpl;

pub fn tenant_router(service: Arc<TenantServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    // Any logged-in user can see who lives in the house
    let members = Router::new()
        .route("/real-tenant", get(list_tenants_handler))
        .route_layer(middleware::from_fn_with_state(auth_state.clone(), tenant_auth));

    let admin = Router::new()
        .route("/real-tenant", post(create_tenant_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, admin_auth));

    members.merge(admin).with_state(service)
}
