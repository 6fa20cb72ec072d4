use std::sync::Arc;

use axum::{
    routing::{get, patch, put},
    Router,
};

use crate::features::services::handlers;
use crate::features::services::services::CatalogService;

/// Public catalog reads (no authentication required)
pub fn public_routes(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/api/services", get(handlers::list_public_services))
        .route("/api/services/search", get(handlers::search_services))
        .route(
            "/api/providers/{id}/services",
            get(handlers::list_services_by_provider),
        )
        .with_state(service)
}

/// Provider-side listing management
pub fn provider_routes(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route(
            "/api/provider/services",
            get(handlers::list_provider_services).post(handlers::create_service),
        )
        .route(
            "/api/provider/services/{id}",
            put(handlers::update_service).delete(handlers::delete_service),
        )
        .with_state(service)
}

/// Listing moderation routes, nested under /api/admin
pub fn admin_routes(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/services", get(handlers::admin_list_services))
        .route("/services/unapproved", get(handlers::admin_list_unapproved))
        .route(
            "/services/{id}",
            put(handlers::admin_update_service).delete(handlers::admin_delete_service),
        )
        .route(
            "/services/{id}/approve",
            put(handlers::toggle_service_approval),
        )
        .route(
            "/services/{id}/toggle",
            patch(handlers::toggle_service_activation),
        )
        .with_state(service)
}
