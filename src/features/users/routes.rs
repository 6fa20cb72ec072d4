use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Self-service routes (any authenticated user)
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route(
            "/api/users/me/profile",
            patch(handlers::update_own_profile),
        )
        .with_state(service)
}

/// Account moderation routes, nested under /api/admin
pub fn admin_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/users", get(handlers::list_users))
        .route("/users/search", get(handlers::search_users))
        .route(
            "/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route(
            "/users/{id}/toggle-status",
            patch(handlers::toggle_user_status),
        )
        .route("/customers", get(handlers::list_customers))
        .route(
            "/customers/{id}",
            get(handlers::get_customer)
                .put(handlers::update_customer)
                .delete(handlers::delete_customer),
        )
        .with_state(service)
}
