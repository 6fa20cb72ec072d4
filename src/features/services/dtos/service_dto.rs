use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Request DTO for creating a listing
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateServiceDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    pub description: Option<String>,

    /// Price in the platform currency; must be positive
    pub price: Decimal,

    #[validate(length(min = 1, max = 50, message = "Duration must be 1-50 characters"))]
    pub duration: String,
}

/// Request DTO for a partial listing update (provider or admin)
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateServiceDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    pub price: Option<Decimal>,

    #[validate(length(min = 1, max = 50, message = "Duration must be 1-50 characters"))]
    pub duration: Option<String>,
}

/// Provider-facing view of a listing, with the category name joined in
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ServiceResponseDto {
    pub id: Uuid,
    pub provider_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub duration: String,
    pub location: String,
    pub is_active: bool,
    pub is_approved: bool,
    /// None when the category has been deleted out from under the listing
    pub category_name: Option<String>,
}

/// Customer-facing view of a visible listing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PublicServiceDto {
    pub id: Uuid,
    pub provider_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub duration: String,
    pub location: String,
    pub category_name: Option<String>,
    pub provider_name: String,
    pub provider_location: String,
}

/// Admin view: listing plus the owning provider's account info
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AdminServiceResponseDto {
    pub id: Uuid,
    pub provider_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub duration: String,
    pub location: String,
    pub is_active: bool,
    pub is_approved: bool,
    pub category_name: Option<String>,
    pub provider_name: String,
    pub provider_email: String,
}

/// Public catalog search filters
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchServicesQuery {
    /// Category id or free-text name
    pub category: Option<String>,

    /// Exact location match
    pub location: Option<String>,

    /// Case-insensitive keyword match against title and description
    pub keyword: Option<String>,

    pub min_price: Option<Decimal>,

    pub max_price: Option<Decimal>,
}
