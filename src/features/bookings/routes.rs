use std::sync::Arc;

use axum::{
    routing::{get, patch, put},
    Router,
};

use crate::features::bookings::handlers;
use crate::features::bookings::services::BookingService;

/// Customer-side booking routes
pub fn customer_routes(service: Arc<BookingService>) -> Router {
    Router::new()
        .route(
            "/api/bookings",
            get(handlers::list_customer_bookings).post(handlers::create_booking),
        )
        .route("/api/bookings/{id}/cancel", patch(handlers::cancel_booking))
        .with_state(service)
}

/// Provider-side booking routes
pub fn provider_routes(service: Arc<BookingService>) -> Router {
    Router::new()
        .route(
            "/api/provider/bookings",
            get(handlers::list_provider_bookings),
        )
        .route(
            "/api/provider/bookings/{id}/accept",
            patch(handlers::accept_booking),
        )
        .route(
            "/api/provider/bookings/{id}/reject",
            patch(handlers::reject_booking),
        )
        .with_state(service)
}

/// Booking moderation routes, nested under /api/admin
pub fn admin_routes(service: Arc<BookingService>) -> Router {
    Router::new()
        .route("/bookings", get(handlers::admin_list_bookings))
        .route("/bookings/stats", get(handlers::booking_stats))
        .route(
            "/bookings/{id}",
            get(handlers::admin_get_booking).delete(handlers::admin_delete_booking),
        )
        .route(
            "/bookings/{id}/status",
            put(handlers::admin_update_booking_status),
        )
        .with_state(service)
}
