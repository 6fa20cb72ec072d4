use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers, model as auth_model};
use crate::features::bookings::{
    dtos as bookings_dtos, handlers as bookings_handlers, models as bookings_models,
};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::providers::{dtos as providers_dtos, handlers as providers_handlers};
use crate::features::reviews::{dtos as reviews_dtos, handlers as reviews_handlers};
use crate::features::services::{dtos as services_dtos, handlers as services_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers, models as users_models};
use crate::shared::types::Meta;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::register,
        auth_handlers::login,
        auth_handlers::get_me,
        // Users (self)
        users_handlers::update_own_profile,
        // Admin: users
        users_handlers::list_users,
        users_handlers::search_users,
        users_handlers::get_user,
        users_handlers::update_user,
        users_handlers::delete_user,
        users_handlers::toggle_user_status,
        // Admin: customers
        users_handlers::list_customers,
        users_handlers::get_customer,
        users_handlers::update_customer,
        users_handlers::delete_customer,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::list_all_categories,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Providers
        providers_handlers::create_provider_profile,
        providers_handlers::browse_providers,
        providers_handlers::get_public_provider,
        providers_handlers::admin_list_providers,
        providers_handlers::admin_get_provider,
        providers_handlers::admin_update_provider,
        providers_handlers::admin_delete_provider,
        // Services
        services_handlers::create_service,
        services_handlers::list_provider_services,
        services_handlers::update_service,
        services_handlers::delete_service,
        services_handlers::list_public_services,
        services_handlers::search_services,
        services_handlers::list_services_by_provider,
        services_handlers::admin_list_services,
        services_handlers::admin_list_unapproved,
        services_handlers::admin_update_service,
        services_handlers::admin_delete_service,
        services_handlers::toggle_service_approval,
        services_handlers::toggle_service_activation,
        // Bookings
        bookings_handlers::create_booking,
        bookings_handlers::list_customer_bookings,
        bookings_handlers::cancel_booking,
        bookings_handlers::list_provider_bookings,
        bookings_handlers::accept_booking,
        bookings_handlers::reject_booking,
        bookings_handlers::admin_list_bookings,
        bookings_handlers::booking_stats,
        bookings_handlers::admin_get_booking,
        bookings_handlers::admin_update_booking_status,
        bookings_handlers::admin_delete_booking,
        // Reviews
        reviews_handlers::add_review,
        reviews_handlers::delete_own_review,
        reviews_handlers::list_service_reviews,
        reviews_handlers::admin_list_reviews,
        reviews_handlers::admin_delete_review,
        // Dashboard
        dashboard_handlers::admin_summary,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_model::AuthenticatedUser,
            auth_dtos::RegisterRequestDto,
            auth_dtos::LoginRequestDto,
            auth_dtos::AuthResponseDto,
            auth_dtos::AuthUserDto,
            auth_dtos::MeResponseDto,
            // Users
            users_models::UserRole,
            users_models::UserStatus,
            users_dtos::UserResponseDto,
            users_dtos::UpdateUserDto,
            users_dtos::UpdateProfileDto,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            // Providers
            providers_dtos::CreateProviderProfileDto,
            providers_dtos::ProviderResponseDto,
            providers_dtos::ProviderBrowseDto,
            providers_dtos::AdminProviderDetailDto,
            providers_dtos::AdminUpdateProviderDto,
            // Services
            services_dtos::CreateServiceDto,
            services_dtos::UpdateServiceDto,
            services_dtos::ServiceResponseDto,
            services_dtos::PublicServiceDto,
            services_dtos::AdminServiceResponseDto,
            // Bookings
            bookings_models::BookingStatus,
            bookings_dtos::CreateBookingDto,
            bookings_dtos::BookingResponseDto,
            bookings_dtos::CustomerBookingDto,
            bookings_dtos::ProviderBookingDto,
            bookings_dtos::AdminBookingDto,
            bookings_dtos::UpdateBookingStatusDto,
            bookings_dtos::BookingStatsDto,
            // Reviews
            reviews_dtos::CreateReviewDto,
            reviews_dtos::ReviewResponseDto,
            reviews_dtos::ReviewDetailDto,
            // Dashboard
            dashboard_dtos::AdminSummaryDto,
            dashboard_dtos::TopRatedServiceDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "Self-service profile updates"),
        (name = "categories", description = "Public category listing"),
        (name = "public", description = "Unauthenticated catalog reads"),
        (name = "provider", description = "Provider profile management"),
        (name = "provider-services", description = "Provider listing management"),
        (name = "provider-bookings", description = "Provider booking decisions"),
        (name = "bookings", description = "Customer bookings"),
        (name = "reviews", description = "Customer reviews"),
        (name = "admin-dashboard", description = "Admin aggregation"),
        (name = "admin-users", description = "Account moderation"),
        (name = "admin-customers", description = "Customer moderation"),
        (name = "admin-providers", description = "Provider moderation"),
        (name = "admin-services", description = "Listing moderation"),
        (name = "admin-bookings", description = "Booking moderation"),
        (name = "admin-reviews", description = "Review moderation"),
        (name = "admin-categories", description = "Category management"),
    )
)]
pub struct ApiDoc;

/// Registers the bearer scheme referenced by the handler annotations
pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Applies the runtime-configured title/version/description to the document
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
