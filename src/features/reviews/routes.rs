use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reviews::handlers;
use crate::features::reviews::services::ReviewService;

/// Public review reads (no authentication required)
pub fn public_routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route(
            "/api/services/{id}/reviews",
            get(handlers::list_service_reviews),
        )
        .with_state(service)
}

/// Customer-side review routes, keyed by the reviewed service
pub fn customer_routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route(
            "/api/reviews/{service_id}",
            post(handlers::add_review).delete(handlers::delete_own_review),
        )
        .with_state(service)
}

/// Review moderation routes, nested under /api/admin
pub fn admin_routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route("/reviews", get(handlers::admin_list_reviews))
        .route("/reviews/{id}", axum::routing::delete(handlers::admin_delete_review))
        .with_state(service)
}
