#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use crate::features::users::models::UserRole;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
pub fn create_user_with_role(role: UserRole) -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        role,
    }
}

#[cfg(test)]
pub fn create_admin_user() -> AuthenticatedUser {
    create_user_with_role(UserRole::Admin)
}

#[cfg(test)]
pub fn create_provider_user() -> AuthenticatedUser {
    create_user_with_role(UserRole::Provider)
}

#[cfg(test)]
pub fn create_customer_user() -> AuthenticatedUser {
    create_user_with_role(UserRole::Customer)
}

/// Wrap a router with middleware that injects the given identity, skipping
/// real token verification in tests.
#[cfg(test)]
pub fn with_user(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                let response: Response = next.run(request).await;
                response
            }
        },
    ))
}
