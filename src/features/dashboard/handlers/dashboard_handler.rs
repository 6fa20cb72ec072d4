use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::auth::guards::RequireAdmin;
use crate::features::dashboard::dtos::AdminSummaryDto;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Dashboard summary: totals, recent users, top rated services
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/summary",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<AdminSummaryDto>),
        (status = 403, description = "Admin access required")
    ),
    tag = "admin-dashboard",
    security(("bearer_auth" = []))
)]
pub async fn admin_summary(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<AdminSummaryDto>>> {
    let summary = service.summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}
