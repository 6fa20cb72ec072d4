use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::features::users::dtos::UserResponseDto;

/// One entry of the best-reviewed services list
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TopRatedServiceDto {
    pub title: String,
    pub average_rating: f64,
    pub review_count: i64,
    pub provider_name: Option<String>,
    pub category_name: Option<String>,
}

/// Platform-wide totals for the admin dashboard
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminSummaryDto {
    pub total_users: i64,
    pub total_providers: i64,
    pub total_customers: i64,
    pub total_services: i64,
    pub total_approved_services: i64,
    pub total_unapproved_services: i64,
    pub total_bookings: i64,
    pub total_reviews: i64,
    pub recent_users: Vec<UserResponseDto>,
    pub top_rated_services: Vec<TopRatedServiceDto>,
}
