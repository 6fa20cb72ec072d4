use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::{RequireAdmin, RequireProvider};
use crate::features::services::dtos::{
    AdminServiceResponseDto, CreateServiceDto, PublicServiceDto, SearchServicesQuery,
    ServiceResponseDto, UpdateServiceDto,
};
use crate::features::services::services::CatalogService;
use crate::shared::types::ApiResponse;

/// Create a listing for the acting provider
#[utoipa::path(
    post,
    path = "/api/provider/services",
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Service created", body = ApiResponse<ServiceResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Provider profile not found")
    ),
    tag = "provider-services",
    security(("bearer_auth" = []))
)]
pub async fn create_service(
    RequireProvider(user): RequireProvider,
    State(service): State<Arc<CatalogService>>,
    AppJson(dto): AppJson<CreateServiceDto>,
) -> Result<(StatusCode, Json<ApiResponse<ServiceResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.create(user.id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(created),
            Some("Service created successfully".to_string()),
            None,
        )),
    ))
}

/// List the acting provider's own listings
#[utoipa::path(
    get,
    path = "/api/provider/services",
    responses(
        (status = 200, description = "Provider's services", body = ApiResponse<Vec<ServiceResponseDto>>),
        (status = 404, description = "Provider profile not found")
    ),
    tag = "provider-services",
    security(("bearer_auth" = []))
)]
pub async fn list_provider_services(
    RequireProvider(user): RequireProvider,
    State(service): State<Arc<CatalogService>>,
) -> Result<Json<ApiResponse<Vec<ServiceResponseDto>>>> {
    let services = service.list_for_provider(user.id).await?;
    Ok(Json(ApiResponse::success(Some(services), None, None)))
}

/// Update one of the acting provider's listings
#[utoipa::path(
    put,
    path = "/api/provider/services/{id}",
    params(("id" = Uuid, Path, description = "Service id")),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Service updated", body = ApiResponse<ServiceResponseDto>),
        (status = 404, description = "Service not found")
    ),
    tag = "provider-services",
    security(("bearer_auth" = []))
)]
pub async fn update_service(
    RequireProvider(user): RequireProvider,
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateServiceDto>,
) -> Result<Json<ApiResponse<ServiceResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(user.id, id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(updated),
        Some("Service updated successfully".to_string()),
        None,
    )))
}

/// Delete one of the acting provider's listings
#[utoipa::path(
    delete,
    path = "/api/provider/services/{id}",
    params(("id" = Uuid, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service deleted"),
        (status = 404, description = "Service not found")
    ),
    tag = "provider-services",
    security(("bearer_auth" = []))
)]
pub async fn delete_service(
    RequireProvider(user): RequireProvider,
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(user.id, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Service deleted successfully".to_string()),
        None,
    )))
}

/// List all visible services
#[utoipa::path(
    get,
    path = "/api/services",
    responses(
        (status = 200, description = "Visible services", body = ApiResponse<Vec<PublicServiceDto>>)
    ),
    tag = "public"
)]
pub async fn list_public_services(
    State(service): State<Arc<CatalogService>>,
) -> Result<Json<ApiResponse<Vec<PublicServiceDto>>>> {
    let services = service.list_visible().await?;
    Ok(Json(ApiResponse::success(Some(services), None, None)))
}

/// Search visible services by category, location, keyword and price range
#[utoipa::path(
    get,
    path = "/api/services/search",
    params(SearchServicesQuery),
    responses(
        (status = 200, description = "Matching services", body = ApiResponse<Vec<PublicServiceDto>>)
    ),
    tag = "public"
)]
pub async fn search_services(
    State(service): State<Arc<CatalogService>>,
    Query(query): Query<SearchServicesQuery>,
) -> Result<Json<ApiResponse<Vec<PublicServiceDto>>>> {
    let services = service.search(query).await?;
    Ok(Json(ApiResponse::success(Some(services), None, None)))
}

/// List a provider's visible services
#[utoipa::path(
    get,
    path = "/api/providers/{id}/services",
    params(("id" = Uuid, Path, description = "Provider profile id")),
    responses(
        (status = 200, description = "Provider's visible services", body = ApiResponse<Vec<PublicServiceDto>>)
    ),
    tag = "public"
)]
pub async fn list_services_by_provider(
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<PublicServiceDto>>>> {
    let services = service.list_visible_by_provider(id).await?;
    Ok(Json(ApiResponse::success(Some(services), None, None)))
}

/// List every listing with its owner
#[utoipa::path(
    get,
    path = "/api/admin/services",
    responses(
        (status = 200, description = "All services", body = ApiResponse<Vec<AdminServiceResponseDto>>),
        (status = 403, description = "Admin access required")
    ),
    tag = "admin-services",
    security(("bearer_auth" = []))
)]
pub async fn admin_list_services(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CatalogService>>,
) -> Result<Json<ApiResponse<Vec<AdminServiceResponseDto>>>> {
    let services = service.admin_list().await?;
    Ok(Json(ApiResponse::success(Some(services), None, None)))
}

/// List listings awaiting approval
#[utoipa::path(
    get,
    path = "/api/admin/services/unapproved",
    responses(
        (status = 200, description = "Unapproved services", body = ApiResponse<Vec<AdminServiceResponseDto>>),
        (status = 403, description = "Admin access required")
    ),
    tag = "admin-services",
    security(("bearer_auth" = []))
)]
pub async fn admin_list_unapproved(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CatalogService>>,
) -> Result<Json<ApiResponse<Vec<AdminServiceResponseDto>>>> {
    let services = service.admin_list_unapproved().await?;
    Ok(Json(ApiResponse::success(Some(services), None, None)))
}

/// Update any listing
#[utoipa::path(
    put,
    path = "/api/admin/services/{id}",
    params(("id" = Uuid, Path, description = "Service id")),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Service updated", body = ApiResponse<ServiceResponseDto>),
        (status = 404, description = "Service not found")
    ),
    tag = "admin-services",
    security(("bearer_auth" = []))
)]
pub async fn admin_update_service(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateServiceDto>,
) -> Result<Json<ApiResponse<ServiceResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.admin_update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(updated),
        Some("Service updated".to_string()),
        None,
    )))
}

/// Delete any listing
#[utoipa::path(
    delete,
    path = "/api/admin/services/{id}",
    params(("id" = Uuid, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service deleted"),
        (status = 404, description = "Service not found")
    ),
    tag = "admin-services",
    security(("bearer_auth" = []))
)]
pub async fn admin_delete_service(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.admin_delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Service deleted successfully".to_string()),
        None,
    )))
}

/// Approve or unapprove a listing
#[utoipa::path(
    put,
    path = "/api/admin/services/{id}/approve",
    params(("id" = Uuid, Path, description = "Service id")),
    responses(
        (status = 200, description = "Approval toggled"),
        (status = 404, description = "Service not found")
    ),
    tag = "admin-services",
    security(("bearer_auth" = []))
)]
pub async fn toggle_service_approval(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>> {
    let approved = service.toggle_approval(id).await?;
    let label = if approved { "approved" } else { "unapproved" };
    Ok(Json(ApiResponse::success(
        Some(serde_json::json!({ "is_approved": approved })),
        Some(format!("Service is now {}", label)),
        None,
    )))
}

/// Activate or deactivate a listing
#[utoipa::path(
    patch,
    path = "/api/admin/services/{id}/toggle",
    params(("id" = Uuid, Path, description = "Service id")),
    responses(
        (status = 200, description = "Activation toggled"),
        (status = 404, description = "Service not found")
    ),
    tag = "admin-services",
    security(("bearer_auth" = []))
)]
pub async fn toggle_service_activation(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>> {
    let active = service.toggle_activation(id).await?;
    let label = if active { "active" } else { "inactive" };
    Ok(Json(ApiResponse::success(
        Some(serde_json::json!({ "is_active": active })),
        Some(format!("Service is now {}", label)),
        None,
    )))
}
