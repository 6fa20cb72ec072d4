use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Dashboard routes, nested under /api/admin
pub fn admin_routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/dashboard/summary", get(handlers::admin_summary))
        .with_state(service)
}
