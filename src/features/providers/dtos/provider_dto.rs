use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::services::dtos::{PublicServiceDto, ServiceResponseDto};
use crate::features::users::dtos::UserResponseDto;

/// Request DTO for creating a provider profile
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProviderProfileDto {
    #[validate(length(min = 1, max = 30, message = "Phone must be 1-30 characters"))]
    pub phone: String,

    /// Category id or free-text name
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    /// Years of experience
    #[validate(range(min = 0, max = 80, message = "Experience must be 0-80 years"))]
    pub experience: i32,

    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: String,
}

/// Profile view with the category name joined in
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProviderResponseDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category_id: Uuid,
    /// None when the category has been deleted out from under the profile
    pub category_name: Option<String>,
    pub experience: i32,
    pub location: String,
    pub is_active: bool,
}

/// Public browse entry: profile plus its visible listings
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProviderBrowseDto {
    #[serde(flatten)]
    pub profile: ProviderResponseDto,
    pub services: Vec<PublicServiceDto>,
}

/// Admin detail: account, profile and every listing (approved or not)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminProviderDetailDto {
    pub user: UserResponseDto,
    pub profile: ProviderResponseDto,
    pub services: Vec<ServiceResponseDto>,
}

/// Admin partial update; name and email also propagate to the linked account
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AdminUpdateProviderDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 30, message = "Phone must be 1-30 characters"))]
    pub phone: Option<String>,

    #[validate(range(min = 0, max = 80, message = "Experience must be 0-80 years"))]
    pub experience: Option<i32>,

    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: Option<String>,

    pub is_active: Option<bool>,
}
