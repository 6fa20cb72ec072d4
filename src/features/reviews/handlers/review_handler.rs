use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::{RequireAdmin, RequireCustomer};
use crate::features::reviews::dtos::{CreateReviewDto, ReviewDetailDto, ReviewResponseDto};
use crate::features::reviews::services::ReviewService;
use crate::shared::types::ApiResponse;

/// Post a review for a service
#[utoipa::path(
    post,
    path = "/api/reviews/{service_id}",
    params(("service_id" = Uuid, Path, description = "Service id")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review added", body = ApiResponse<ReviewResponseDto>),
        (status = 400, description = "Validation error or already reviewed")
    ),
    tag = "reviews",
    security(("bearer_auth" = []))
)]
pub async fn add_review(
    RequireCustomer(user): RequireCustomer,
    State(service): State<Arc<ReviewService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<CreateReviewDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReviewResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let review = service.add(user.id, id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(review),
            Some("Review added".to_string()),
            None,
        )),
    ))
}

/// Delete the acting customer's review of a service
#[utoipa::path(
    delete,
    path = "/api/reviews/{service_id}",
    params(("service_id" = Uuid, Path, description = "Service id")),
    responses(
        (status = 200, description = "Review deleted"),
        (status = 404, description = "Review not found")
    ),
    tag = "reviews",
    security(("bearer_auth" = []))
)]
pub async fn delete_own_review(
    RequireCustomer(user): RequireCustomer,
    State(service): State<Arc<ReviewService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_own(user.id, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Review deleted successfully".to_string()),
        None,
    )))
}

/// List reviews of a service
#[utoipa::path(
    get,
    path = "/api/services/{id}/reviews",
    params(("id" = Uuid, Path, description = "Service id")),
    responses(
        (status = 200, description = "Reviews for the service", body = ApiResponse<Vec<ReviewDetailDto>>)
    ),
    tag = "public"
)]
pub async fn list_service_reviews(
    State(service): State<Arc<ReviewService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ReviewDetailDto>>>> {
    let reviews = service.list_by_service(id).await?;
    Ok(Json(ApiResponse::success(Some(reviews), None, None)))
}

/// List every review
#[utoipa::path(
    get,
    path = "/api/admin/reviews",
    responses(
        (status = 200, description = "All reviews", body = ApiResponse<Vec<ReviewDetailDto>>),
        (status = 403, description = "Admin access required")
    ),
    tag = "admin-reviews",
    security(("bearer_auth" = []))
)]
pub async fn admin_list_reviews(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ReviewService>>,
) -> Result<Json<ApiResponse<Vec<ReviewDetailDto>>>> {
    let reviews = service.admin_list().await?;
    Ok(Json(ApiResponse::success(Some(reviews), None, None)))
}

/// Delete any review
#[utoipa::path(
    delete,
    path = "/api/admin/reviews/{id}",
    params(("id" = Uuid, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted"),
        (status = 404, description = "Review not found")
    ),
    tag = "admin-reviews",
    security(("bearer_auth" = []))
)]
pub async fn admin_delete_review(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ReviewService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.admin_delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Review deleted by admin".to_string()),
        None,
    )))
}
