//! Role-based authorization guards.
//!
//! Each guard extracts the authenticated user from request extensions and
//! verifies the required role, turning the route table into a declarative
//! statement of who may call what. Roles are flat: customers, providers and
//! admins each see their own surface, with no hierarchy between them.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for admin-only operations.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(user): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access denied".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}

/// Guard for provider-side operations (profile, listings, booking decisions).
pub struct RequireProvider(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireProvider
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.is_provider() {
            return Err(AppError::Forbidden("Provider access denied".to_string()));
        }

        Ok(RequireProvider(user.clone()))
    }
}

/// Guard for customer-side operations (booking, reviewing).
pub struct RequireCustomer(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireCustomer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.is_customer() {
            return Err(AppError::Forbidden("Customer access denied".to_string()));
        }

        Ok(RequireCustomer(user.clone()))
    }
}

fn authenticated(parts: &Parts) -> Result<&AuthenticatedUser, AppError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        create_admin_user, create_customer_user, create_provider_user, with_user,
    };
    use axum::{http::StatusCode, routing::get, Router};
    use axum_test::TestServer;

    async fn admin_only(RequireAdmin(_user): RequireAdmin) -> StatusCode {
        StatusCode::OK
    }

    async fn customer_only(RequireCustomer(_user): RequireCustomer) -> StatusCode {
        StatusCode::OK
    }

    async fn provider_only(RequireProvider(_user): RequireProvider) -> StatusCode {
        StatusCode::OK
    }

    fn app() -> Router {
        Router::new()
            .route("/admin", get(admin_only))
            .route("/customer", get(customer_only))
            .route("/provider", get(provider_only))
    }

    #[tokio::test]
    async fn test_admin_guard_allows_admin() {
        let server = TestServer::new(with_user(app(), create_admin_user())).unwrap();
        let response = server.get("/admin").await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_admin_guard_rejects_customer() {
        let server = TestServer::new(with_user(app(), create_customer_user())).unwrap();
        let response = server.get("/admin").await;
        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_provider_guard_allows_provider() {
        let server = TestServer::new(with_user(app(), create_provider_user())).unwrap();
        let response = server.get("/provider").await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_customer_guard_rejects_admin() {
        let server = TestServer::new(with_user(app(), create_admin_user())).unwrap();
        let response = server.get("/customer").await;
        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_guard_rejects_unauthenticated() {
        let server = TestServer::new(app()).unwrap();
        let response = server.get("/admin").await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }
}
