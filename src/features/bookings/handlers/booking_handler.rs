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
use crate::features::auth::guards::{RequireAdmin, RequireCustomer, RequireProvider};
use crate::features::bookings::dtos::{
    AdminBookingDto, AdminBookingsQuery, BookingResponseDto, BookingStatsDto, CreateBookingDto,
    CustomerBookingDto, ProviderBookingDto, UpdateBookingStatusDto,
};
use crate::features::bookings::services::BookingService;
use crate::shared::types::ApiResponse;

/// Book a slot
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = ApiResponse<BookingResponseDto>),
        (status = 400, description = "Validation error, unavailable service or slot already booked"),
        (status = 404, description = "Provider or service not found")
    ),
    tag = "bookings",
    security(("bearer_auth" = []))
)]
pub async fn create_booking(
    RequireCustomer(user): RequireCustomer,
    State(service): State<Arc<BookingService>>,
    AppJson(dto): AppJson<CreateBookingDto>,
) -> Result<(StatusCode, Json<ApiResponse<BookingResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let booking = service.create(user.id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(booking),
            Some("Booking created successfully".to_string()),
            None,
        )),
    ))
}

/// List the acting customer's bookings
#[utoipa::path(
    get,
    path = "/api/bookings",
    responses(
        (status = 200, description = "Customer's bookings", body = ApiResponse<Vec<CustomerBookingDto>>)
    ),
    tag = "bookings",
    security(("bearer_auth" = []))
)]
pub async fn list_customer_bookings(
    RequireCustomer(user): RequireCustomer,
    State(service): State<Arc<BookingService>>,
) -> Result<Json<ApiResponse<Vec<CustomerBookingDto>>>> {
    let bookings = service.list_for_customer(user.id).await?;
    Ok(Json(ApiResponse::success(Some(bookings), None, None)))
}

/// Cancel a pending booking
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}/cancel",
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking cancelled"),
        (status = 400, description = "Booking is not pending"),
        (status = 404, description = "Booking not found")
    ),
    tag = "bookings",
    security(("bearer_auth" = []))
)]
pub async fn cancel_booking(
    RequireCustomer(user): RequireCustomer,
    State(service): State<Arc<BookingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.cancel(user.id, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Booking cancelled successfully".to_string()),
        None,
    )))
}

/// List bookings addressed to the acting provider
#[utoipa::path(
    get,
    path = "/api/provider/bookings",
    responses(
        (status = 200, description = "Provider's bookings", body = ApiResponse<Vec<ProviderBookingDto>>),
        (status = 404, description = "Provider profile not found")
    ),
    tag = "provider-bookings",
    security(("bearer_auth" = []))
)]
pub async fn list_provider_bookings(
    RequireProvider(user): RequireProvider,
    State(service): State<Arc<BookingService>>,
) -> Result<Json<ApiResponse<Vec<ProviderBookingDto>>>> {
    let bookings = service.list_for_provider(user.id).await?;
    Ok(Json(ApiResponse::success(Some(bookings), None, None)))
}

/// Accept a pending booking
#[utoipa::path(
    patch,
    path = "/api/provider/bookings/{id}/accept",
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking accepted", body = ApiResponse<BookingResponseDto>),
        (status = 400, description = "Booking is not pending"),
        (status = 404, description = "Booking not found")
    ),
    tag = "provider-bookings",
    security(("bearer_auth" = []))
)]
pub async fn accept_booking(
    RequireProvider(user): RequireProvider,
    State(service): State<Arc<BookingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponseDto>>> {
    let booking = service.accept(user.id, id).await?;
    Ok(Json(ApiResponse::success(
        Some(booking),
        Some("Booking accepted".to_string()),
        None,
    )))
}

/// Reject a pending booking
#[utoipa::path(
    patch,
    path = "/api/provider/bookings/{id}/reject",
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking rejected", body = ApiResponse<BookingResponseDto>),
        (status = 400, description = "Booking is not pending"),
        (status = 404, description = "Booking not found")
    ),
    tag = "provider-bookings",
    security(("bearer_auth" = []))
)]
pub async fn reject_booking(
    RequireProvider(user): RequireProvider,
    State(service): State<Arc<BookingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponseDto>>> {
    let booking = service.reject(user.id, id).await?;
    Ok(Json(ApiResponse::success(
        Some(booking),
        Some("Booking rejected".to_string()),
        None,
    )))
}

/// List bookings, optionally filtered by status
#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    params(AdminBookingsQuery),
    responses(
        (status = 200, description = "Bookings", body = ApiResponse<Vec<AdminBookingDto>>),
        (status = 403, description = "Admin access required")
    ),
    tag = "admin-bookings",
    security(("bearer_auth" = []))
)]
pub async fn admin_list_bookings(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<BookingService>>,
    Query(query): Query<AdminBookingsQuery>,
) -> Result<Json<ApiResponse<Vec<AdminBookingDto>>>> {
    let bookings = service.admin_list(query.status).await?;
    Ok(Json(ApiResponse::success(Some(bookings), None, None)))
}

/// Booking counts grouped by status
#[utoipa::path(
    get,
    path = "/api/admin/bookings/stats",
    responses(
        (status = 200, description = "Booking stats", body = ApiResponse<Vec<BookingStatsDto>>),
        (status = 403, description = "Admin access required")
    ),
    tag = "admin-bookings",
    security(("bearer_auth" = []))
)]
pub async fn booking_stats(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<BookingService>>,
) -> Result<Json<ApiResponse<Vec<BookingStatsDto>>>> {
    let stats = service.stats().await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// Get a single booking
#[utoipa::path(
    get,
    path = "/api/admin/bookings/{id}",
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking found", body = ApiResponse<AdminBookingDto>),
        (status = 404, description = "Booking not found")
    ),
    tag = "admin-bookings",
    security(("bearer_auth" = []))
)]
pub async fn admin_get_booking(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<BookingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AdminBookingDto>>> {
    let booking = service.admin_get(id).await?;
    Ok(Json(ApiResponse::success(Some(booking), None, None)))
}

/// Override a booking's status (pending bookings only)
#[utoipa::path(
    put,
    path = "/api/admin/bookings/{id}/status",
    params(("id" = Uuid, Path, description = "Booking id")),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<AdminBookingDto>),
        (status = 400, description = "Transition not allowed"),
        (status = 404, description = "Booking not found")
    ),
    tag = "admin-bookings",
    security(("bearer_auth" = []))
)]
pub async fn admin_update_booking_status(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<BookingService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateBookingStatusDto>,
) -> Result<Json<ApiResponse<AdminBookingDto>>> {
    let booking = service.admin_update_status(id, dto.status).await?;
    Ok(Json(ApiResponse::success(
        Some(booking),
        Some("Booking status updated".to_string()),
        None,
    )))
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/api/admin/bookings/{id}",
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking deleted"),
        (status = 404, description = "Booking not found")
    ),
    tag = "admin-bookings",
    security(("bearer_auth" = []))
)]
pub async fn admin_delete_booking(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<BookingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.admin_delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Booking deleted successfully".to_string()),
        None,
    )))
}
