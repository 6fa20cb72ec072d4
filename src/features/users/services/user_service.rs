use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{
    UpdateProfileDto, UpdateUserDto, UserResponseDto, UserSearchQuery,
};
use crate::features::users::models::{User, UserRole, UserStatus};

const USER_COLUMNS: &str =
    "id, name, email, password_hash, role, status, created_at, updated_at";

/// Service for account moderation and profile updates
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every account, newest first
    pub async fn list(&self) -> Result<Vec<UserResponseDto>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list users: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    /// Filtered, paginated listing of customer and provider accounts
    pub async fn search(&self, query: &UserSearchQuery) -> Result<(Vec<UserResponseDto>, i64)> {
        // An admin filter is never honoured; admins are excluded outright
        let role = query.role.filter(|r| *r != UserRole::Admin);
        let name_pattern = query.name.as_ref().map(|n| format!("%{}%", n));
        let email_pattern = query.email.as_ref().map(|e| format!("%{}%", e));
        let limit = query.page_size.clamp(1, crate::shared::constants::MAX_PAGE_SIZE);
        let offset = (query.page.max(1) - 1) * limit;

        let users = sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE role <> 'admin'
            AND ($1::user_role IS NULL OR role = $1)
            AND ($2::text IS NULL OR name ILIKE $2)
            AND ($3::text IS NULL OR email ILIKE $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#
        ))
        .bind(role)
        .bind(&name_pattern)
        .bind(&email_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search users: {:?}", e);
            AppError::Database(e)
        })?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM users
            WHERE role <> 'admin'
            AND ($1::user_role IS NULL OR role = $1)
            AND ($2::text IS NULL OR name ILIKE $2)
            AND ($3::text IS NULL OR email ILIKE $3)
            "#,
        )
        .bind(role)
        .bind(&name_pattern)
        .bind(&email_pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count users: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((users.into_iter().map(|u| u.into()).collect(), total))
    }

    /// Get a single account by id
    pub async fn get(&self, id: Uuid) -> Result<UserResponseDto> {
        let user = self.fetch_by_id(id).await?;
        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Admin-side partial account update
    pub async fn update(&self, id: Uuid, dto: UpdateUserDto) -> Result<UserResponseDto> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                role = COALESCE($4, role),
                status = COALESCE($5, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(dto.name)
        .bind(dto.email)
        .bind(dto.role)
        .bind(dto.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_unique_email)?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Delete an account. Provider profiles and their services are removed
    /// by the cascade on providers.user_id; bookings and reviews keep their
    /// (now dangling) references.
    pub async fn delete(&self, id: Uuid) -> Result<UserRole> {
        let role = sqlx::query_scalar::<_, UserRole>(
            "DELETE FROM users WHERE id = $1 RETURNING role",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete user: {:?}", e);
            AppError::Database(e)
        })?;

        let role = role.ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        tracing::info!("User deleted: id={}, role={}", id, role);
        Ok(role)
    }

    /// Block or unblock an account. Admin accounts cannot be blocked.
    pub async fn toggle_status(&self, id: Uuid) -> Result<UserStatus> {
        let user = self
            .fetch_by_id(id)
            .await?
            .filter(|u| u.role != UserRole::Admin)
            .ok_or_else(|| {
                AppError::NotFound("User not found or cannot block admin".to_string())
            })?;

        let status = user.status.toggled();
        sqlx::query("UPDATE users SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to toggle user status: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("User status toggled: id={}, status={}", id, status);
        Ok(status)
    }

    /// Self-service name/email update
    pub async fn update_profile(&self, id: Uuid, dto: UpdateProfileDto) -> Result<UserResponseDto> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(dto.name)
        .bind(dto.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_unique_email)?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// List customer accounts only
    pub async fn list_customers(&self) -> Result<Vec<UserResponseDto>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = 'customer' ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list customers: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    /// Get a customer account by id
    pub async fn get_customer(&self, id: Uuid) -> Result<UserResponseDto> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND role = 'customer'"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get customer: {:?}", e);
            AppError::Database(e)
        })?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
    }

    /// Partial update scoped to customer accounts
    pub async fn update_customer(&self, id: Uuid, dto: UpdateUserDto) -> Result<UserResponseDto> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                status = COALESCE($4, status),
                updated_at = NOW()
            WHERE id = $1 AND role = 'customer'
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(dto.name)
        .bind(dto.email)
        .bind(dto.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_unique_email)?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
    }

    /// Delete scoped to customer accounts
    pub async fn delete_customer(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1 AND role = 'customer'")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete customer: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Customer not found".to_string()));
        }

        tracing::info!("Customer deleted: id={}", id);
        Ok(())
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch user: {:?}", e);
            AppError::Database(e)
        })
    }
}

/// Translate a unique-index violation on users.email into a domain conflict
fn map_unique_email(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db) = e {
        if db.is_unique_violation() {
            return AppError::Conflict("Email is already in use".to_string());
        }
    }
    tracing::error!("Failed to update user: {:?}", e);
    AppError::Database(e)
}
