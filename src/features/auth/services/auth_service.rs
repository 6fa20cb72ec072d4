use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{
    AuthResponseDto, AuthUserDto, LoginRequestDto, MeResponseDto, RegisterRequestDto,
};
use crate::features::auth::services::TokenService;
use crate::features::users::models::{User, UserRole, UserStatus};

const USER_COLUMNS: &str =
    "id, name, email, password_hash, role, status, created_at, updated_at";

/// Service for registration and credential login
pub struct AuthService {
    pool: PgPool,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(pool: PgPool, tokens: Arc<TokenService>) -> Self {
        Self { pool, tokens }
    }

    /// Register a customer or provider account and issue a token
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<AuthResponseDto> {
        if dto.role == UserRole::Admin {
            return Err(AppError::Forbidden(
                "You cannot register as admin".to_string(),
            ));
        }

        if dto.password != dto.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        let password_hash = bcrypt::hash(&dto.password, bcrypt::DEFAULT_COST)?;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&password_hash)
        .bind(dto.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db) = e {
                if db.is_unique_violation() {
                    return AppError::Conflict("Email is already in use".to_string());
                }
            }
            tracing::error!("Failed to register user: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("User registered: id={}, role={}", user.id, user.role);

        self.auth_response(user)
    }

    /// Verify credentials and issue a token. Blocked accounts cannot log in.
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(&dto.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch user for login: {:?}", e);
            AppError::Database(e)
        })?;

        // Same message whether the email is unknown or the password is wrong
        let user = user
            .ok_or_else(|| AppError::Validation("Invalid email or password".to_string()))?;

        if user.status == UserStatus::Blocked {
            return Err(AppError::Forbidden(
                "Your account has been blocked. Please contact support.".to_string(),
            ));
        }

        if !bcrypt::verify(&dto.password, &user.password_hash)? {
            return Err(AppError::Validation(
                "Invalid email or password".to_string(),
            ));
        }

        tracing::info!("User logged in: id={}", user.id);

        self.auth_response(user)
    }

    /// Fetch the current account behind an authenticated request
    pub async fn get_current_user(&self, user_id: Uuid) -> Result<MeResponseDto> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch current user: {:?}", e);
            AppError::Database(e)
        })?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    fn auth_response(&self, user: User) -> Result<AuthResponseDto> {
        let (access_token, expires_in) = self.tokens.issue(&user)?;

        Ok(AuthResponseDto {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user: AuthUserDto::from(&user),
        })
    }
}
