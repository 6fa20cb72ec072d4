use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::bookings::models::BookingStatus;
use crate::shared::validation::SLOT_TIME_REGEX;

/// Request DTO for booking a slot
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBookingDto {
    pub provider_id: Uuid,

    pub service_id: Uuid,

    /// Calendar day of the slot
    pub date: NaiveDate,

    /// Slot time; compared verbatim against existing bookings
    #[validate(regex(path = *SLOT_TIME_REGEX, message = "Time must be in HH:MM format"))]
    pub time: String,

    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: String,
}

/// Booking as returned right after creation, enriched for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookingResponseDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub provider_id: Uuid,
    pub service_id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub location: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub service_title: Option<String>,
    pub service_price: Option<Decimal>,
    pub provider_name: Option<String>,
    pub provider_category: Option<String>,
}

/// Customer's view of their own bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CustomerBookingDto {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub location: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub service_title: Option<String>,
    pub service_price: Option<Decimal>,
    pub provider_name: Option<String>,
    pub provider_email: Option<String>,
    pub provider_phone: Option<String>,
    pub provider_location: Option<String>,
}

/// Provider's view of incoming bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProviderBookingDto {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub location: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub service_title: Option<String>,
    pub service_price: Option<Decimal>,
}

/// Admin's view with both parties resolved
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AdminBookingDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub provider_id: Uuid,
    pub service_id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub location: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub provider_name: Option<String>,
    pub provider_email: Option<String>,
}

/// Admin booking list filter
#[derive(Debug, Deserialize, IntoParams)]
pub struct AdminBookingsQuery {
    pub status: Option<BookingStatus>,
}

/// Admin status override request; still bound by the transition graph
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatus,
}

/// One row of the per-status booking count
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookingStatsDto {
    pub status: BookingStatus,
    pub count: i64,
}
