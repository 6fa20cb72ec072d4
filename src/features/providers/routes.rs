use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::providers::handlers;
use crate::features::providers::services::ProviderService;

/// Public browse routes (no authentication required)
pub fn public_routes(service: Arc<ProviderService>) -> Router {
    Router::new()
        .route("/api/providers", get(handlers::browse_providers))
        .route("/api/providers/{id}", get(handlers::get_public_provider))
        .with_state(service)
}

/// Provider-side profile creation
pub fn provider_routes(service: Arc<ProviderService>) -> Router {
    Router::new()
        .route(
            "/api/provider/profile",
            post(handlers::create_provider_profile),
        )
        .with_state(service)
}

/// Provider moderation routes, nested under /api/admin
pub fn admin_routes(service: Arc<ProviderService>) -> Router {
    Router::new()
        .route("/providers", get(handlers::admin_list_providers))
        .route(
            "/providers/{id}",
            get(handlers::admin_get_provider)
                .put(handlers::admin_update_provider)
                .delete(handlers::admin_delete_provider),
        )
        .with_state(service)
}
