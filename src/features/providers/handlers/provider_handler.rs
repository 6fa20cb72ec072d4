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
use crate::features::auth::guards::{RequireAdmin, RequireProvider};
use crate::features::providers::dtos::{
    AdminProviderDetailDto, AdminUpdateProviderDto, CreateProviderProfileDto, ProviderBrowseDto,
    ProviderResponseDto,
};
use crate::features::providers::services::ProviderService;
use crate::features::users::dtos::UserResponseDto;
use crate::shared::types::ApiResponse;

/// Create the acting provider's business profile
#[utoipa::path(
    post,
    path = "/api/provider/profile",
    request_body = CreateProviderProfileDto,
    responses(
        (status = 201, description = "Profile created", body = ApiResponse<ProviderResponseDto>),
        (status = 400, description = "Validation error or profile already exists"),
        (status = 403, description = "Provider access required")
    ),
    tag = "provider",
    security(("bearer_auth" = []))
)]
pub async fn create_provider_profile(
    RequireProvider(user): RequireProvider,
    State(service): State<Arc<ProviderService>>,
    AppJson(dto): AppJson<CreateProviderProfileDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProviderResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let profile = service.create_profile(user.id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(profile),
            Some("Provider profile created successfully".to_string()),
            None,
        )),
    ))
}

/// Browse active providers with their visible services
#[utoipa::path(
    get,
    path = "/api/providers",
    responses(
        (status = 200, description = "Active providers", body = ApiResponse<Vec<ProviderBrowseDto>>)
    ),
    tag = "public"
)]
pub async fn browse_providers(
    State(service): State<Arc<ProviderService>>,
) -> Result<Json<ApiResponse<Vec<ProviderBrowseDto>>>> {
    let providers = service.browse().await?;
    Ok(Json(ApiResponse::success(Some(providers), None, None)))
}

/// Get a provider's public profile
#[utoipa::path(
    get,
    path = "/api/providers/{id}",
    params(("id" = Uuid, Path, description = "Provider profile id")),
    responses(
        (status = 200, description = "Provider found", body = ApiResponse<ProviderResponseDto>),
        (status = 404, description = "Provider not found")
    ),
    tag = "public"
)]
pub async fn get_public_provider(
    State(service): State<Arc<ProviderService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProviderResponseDto>>> {
    let provider = service.get_public_profile(id).await?;
    Ok(Json(ApiResponse::success(Some(provider), None, None)))
}

/// List provider accounts
#[utoipa::path(
    get,
    path = "/api/admin/providers",
    responses(
        (status = 200, description = "Provider accounts", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 403, description = "Admin access required")
    ),
    tag = "admin-providers",
    security(("bearer_auth" = []))
)]
pub async fn admin_list_providers(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ProviderService>>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let providers = service.admin_list().await?;
    Ok(Json(ApiResponse::success(Some(providers), None, None)))
}

/// Full provider detail: account, profile and listings
#[utoipa::path(
    get,
    path = "/api/admin/providers/{id}",
    params(("id" = Uuid, Path, description = "Provider profile id")),
    responses(
        (status = 200, description = "Provider detail", body = ApiResponse<AdminProviderDetailDto>),
        (status = 404, description = "Provider profile not found")
    ),
    tag = "admin-providers",
    security(("bearer_auth" = []))
)]
pub async fn admin_get_provider(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ProviderService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AdminProviderDetailDto>>> {
    let detail = service.admin_detail(id).await?;
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

/// Update a provider's profile (and linked account name/email)
#[utoipa::path(
    put,
    path = "/api/admin/providers/{id}",
    params(("id" = Uuid, Path, description = "Provider profile id")),
    request_body = AdminUpdateProviderDto,
    responses(
        (status = 200, description = "Provider updated", body = ApiResponse<ProviderResponseDto>),
        (status = 404, description = "Provider profile not found")
    ),
    tag = "admin-providers",
    security(("bearer_auth" = []))
)]
pub async fn admin_update_provider(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ProviderService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<AdminUpdateProviderDto>,
) -> Result<Json<ApiResponse<ProviderResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let profile = service.admin_update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(profile), None, None)))
}

/// Delete a provider: account, profile and all listings
#[utoipa::path(
    delete,
    path = "/api/admin/providers/{id}",
    params(("id" = Uuid, Path, description = "Provider profile id")),
    responses(
        (status = 200, description = "Provider deleted"),
        (status = 404, description = "Provider profile not found")
    ),
    tag = "admin-providers",
    security(("bearer_auth" = []))
)]
pub async fn admin_delete_provider(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ProviderService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.admin_delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Provider, profile, and all related services deleted successfully".to_string()),
        None,
    )))
}
