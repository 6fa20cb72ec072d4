use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::dtos::{
    UpdateProfileDto, UpdateUserDto, UserResponseDto, UserSearchQuery,
};
use crate::features::users::services::UserService;
use crate::shared::types::{ApiResponse, Meta};

/// List all accounts
#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "List of users", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 403, description = "Admin access required")
    ),
    tag = "admin-users",
    security(("bearer_auth" = []))
)]
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let users = service.list().await?;
    Ok(Json(ApiResponse::success(Some(users), None, None)))
}

/// Filtered, paginated listing of customers and providers
#[utoipa::path(
    get,
    path = "/api/admin/users/search",
    params(UserSearchQuery),
    responses(
        (status = 200, description = "Matching users", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 403, description = "Admin access required")
    ),
    tag = "admin-users",
    security(("bearer_auth" = []))
)]
pub async fn search_users(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
    Query(query): Query<UserSearchQuery>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let (users, total) = service.search(&query).await?;
    Ok(Json(ApiResponse::success(
        Some(users),
        None,
        Some(Meta { total }),
    )))
}

/// Get an account by id
#[utoipa::path(
    get,
    path = "/api/admin/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserResponseDto>),
        (status = 404, description = "User not found")
    ),
    tag = "admin-users",
    security(("bearer_auth" = []))
)]
pub async fn get_user(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let user = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(user), None, None)))
}

/// Update any account
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserResponseDto>),
        (status = 404, description = "User not found")
    ),
    tag = "admin-users",
    security(("bearer_auth" = []))
)]
pub async fn update_user(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(user), None, None)))
}

/// Delete an account and its provider data
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found")
    ),
    tag = "admin-users",
    security(("bearer_auth" = []))
)]
pub async fn delete_user(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("User and related data deleted successfully".to_string()),
        None,
    )))
}

/// Block or unblock an account
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/toggle-status",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Status toggled"),
        (status = 404, description = "User not found or cannot block admin")
    ),
    tag = "admin-users",
    security(("bearer_auth" = []))
)]
pub async fn toggle_user_status(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>> {
    let status = service.toggle_status(id).await?;
    Ok(Json(ApiResponse::success(
        Some(serde_json::json!({ "status": status })),
        Some(format!("User {}", status)),
        None,
    )))
}

/// Update the caller's own name/email
#[utoipa::path(
    patch,
    path = "/api/users/me/profile",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Email already in use"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn update_own_profile(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<UpdateProfileDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update_profile(user.id, dto).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

/// List customer accounts
#[utoipa::path(
    get,
    path = "/api/admin/customers",
    responses(
        (status = 200, description = "List of customers", body = ApiResponse<Vec<UserResponseDto>>)
    ),
    tag = "admin-customers",
    security(("bearer_auth" = []))
)]
pub async fn list_customers(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let customers = service.list_customers().await?;
    Ok(Json(ApiResponse::success(Some(customers), None, None)))
}

/// Get a customer account
#[utoipa::path(
    get,
    path = "/api/admin/customers/{id}",
    params(("id" = Uuid, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer found", body = ApiResponse<UserResponseDto>),
        (status = 404, description = "Customer not found")
    ),
    tag = "admin-customers",
    security(("bearer_auth" = []))
)]
pub async fn get_customer(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let customer = service.get_customer(id).await?;
    Ok(Json(ApiResponse::success(Some(customer), None, None)))
}

/// Update a customer account
#[utoipa::path(
    put,
    path = "/api/admin/customers/{id}",
    params(("id" = Uuid, Path, description = "Customer id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Customer updated", body = ApiResponse<UserResponseDto>),
        (status = 404, description = "Customer not found")
    ),
    tag = "admin-customers",
    security(("bearer_auth" = []))
)]
pub async fn update_customer(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let customer = service.update_customer(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(customer), None, None)))
}

/// Delete a customer account
#[utoipa::path(
    delete,
    path = "/api/admin/customers/{id}",
    params(("id" = Uuid, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 404, description = "Customer not found")
    ),
    tag = "admin-customers",
    security(("bearer_auth" = []))
)]
pub async fn delete_customer(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_customer(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Customer deleted successfully".to_string()),
        None,
    )))
}
