use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::services::CategoryService;
use crate::features::providers::dtos::{
    AdminProviderDetailDto, AdminUpdateProviderDto, CreateProviderProfileDto, ProviderBrowseDto,
    ProviderResponseDto,
};
use crate::features::services::dtos::{PublicServiceDto, ServiceResponseDto};
use crate::features::users::dtos::UserResponseDto;
use crate::features::users::models::{User, UserRole};

/// Profile projection with the category name joined in
const PROFILE_SELECT: &str = r#"
    SELECT p.id, p.user_id, p.name, p.email, p.phone, p.category_id,
           c.name AS category_name,
           p.experience, p.location, p.is_active
    FROM providers p
    LEFT JOIN categories c ON c.id = p.category_id
"#;

/// Service for provider profile lifecycle and browse reads
pub struct ProviderService {
    pool: PgPool,
    categories: Arc<CategoryService>,
}

impl ProviderService {
    pub fn new(pool: PgPool, categories: Arc<CategoryService>) -> Self {
        Self { pool, categories }
    }

    /// Create the acting user's provider profile. One profile per account.
    pub async fn create_profile(
        &self,
        user_id: Uuid,
        dto: CreateProviderProfileDto,
    ) -> Result<ProviderResponseDto> {
        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM providers WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check existing profile: {:?}", e);
                AppError::Database(e)
            })?;

        if existing.is_some() {
            return Err(AppError::Conflict(
                "Provider profile already exists".to_string(),
            ));
        }

        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, role, status, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch user: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.role != UserRole::Provider {
            return Err(AppError::Forbidden(
                "Only providers can create a profile".to_string(),
            ));
        }

        let category = self
            .categories
            .resolve(&dto.category)
            .await
            .map_err(|e| match e {
                AppError::Validation(_) => {
                    AppError::Validation("Invalid category name".to_string())
                }
                other => other,
            })?;

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO providers (user_id, name, email, phone, category_id, experience, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&dto.phone)
        .bind(category.id)
        .bind(dto.experience)
        .bind(&dto.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create provider profile: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Provider profile created: id={}, user={}", id, user.id);

        self.profile_view(id).await
    }

    /// Public browse: active profiles with their visible listings embedded
    pub async fn browse(&self) -> Result<Vec<ProviderBrowseDto>> {
        let profiles = sqlx::query_as::<_, ProviderResponseDto>(&format!(
            "{PROFILE_SELECT} WHERE p.is_active = TRUE ORDER BY p.name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to browse providers: {:?}", e);
            AppError::Database(e)
        })?;

        let provider_ids: Vec<Uuid> = profiles.iter().map(|p| p.id).collect();

        let services = sqlx::query_as::<_, PublicServiceDto>(
            r#"
            SELECT s.id, s.provider_id, s.title, s.description, s.price, s.duration,
                   s.location,
                   c.name AS category_name,
                   p.name AS provider_name,
                   p.location AS provider_location
            FROM services s
            LEFT JOIN categories c ON c.id = s.category_id
            JOIN providers p ON p.id = s.provider_id
            WHERE s.provider_id = ANY($1)
            AND s.is_active = TRUE AND s.is_approved = TRUE
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(&provider_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch provider services: {:?}", e);
            AppError::Database(e)
        })?;

        let mut grouped: std::collections::HashMap<Uuid, Vec<PublicServiceDto>> =
            std::collections::HashMap::new();
        for service in services {
            grouped.entry(service.provider_id).or_default().push(service);
        }

        Ok(profiles
            .into_iter()
            .map(|profile| {
                let services = grouped.remove(&profile.id).unwrap_or_default();
                ProviderBrowseDto { profile, services }
            })
            .collect())
    }

    /// Public profile detail
    pub async fn get_public_profile(&self, id: Uuid) -> Result<ProviderResponseDto> {
        let profile =
            sqlx::query_as::<_, ProviderResponseDto>(&format!("{PROFILE_SELECT} WHERE p.id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to fetch provider profile: {:?}", e);
                    AppError::Database(e)
                })?;

        profile.ok_or_else(|| AppError::NotFound("Provider not found".to_string()))
    }

    /// Admin: provider-role accounts
    pub async fn admin_list(&self) -> Result<Vec<UserResponseDto>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, role, status, created_at, updated_at
            FROM users
            WHERE role = 'provider'
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list providers: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    /// Admin: account + profile + every listing for one provider
    pub async fn admin_detail(&self, profile_id: Uuid) -> Result<AdminProviderDetailDto> {
        let profile = self.profile_view(profile_id).await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, role, status, created_at, updated_at
            FROM users
            WHERE id = $1 AND role = 'provider'
            "#,
        )
        .bind(profile.user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch provider user: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| {
            AppError::NotFound("User not found for this provider profile".to_string())
        })?;

        let services = sqlx::query_as::<_, ServiceResponseDto>(
            r#"
            SELECT s.id, s.provider_id, s.category_id, s.title, s.description, s.price,
                   s.duration, s.location, s.is_active, s.is_approved,
                   c.name AS category_name
            FROM services s
            LEFT JOIN categories c ON c.id = s.category_id
            WHERE s.provider_id = $1
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch provider services: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(AdminProviderDetailDto {
            user: user.into(),
            profile,
            services,
        })
    }

    /// Admin partial update; name/email propagate to the linked account so
    /// the denormalized copies stay in sync.
    pub async fn admin_update(
        &self,
        profile_id: Uuid,
        dto: AdminUpdateProviderDto,
    ) -> Result<ProviderResponseDto> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let user_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE providers
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                experience = COALESCE($5, experience),
                location = COALESCE($6, location),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING user_id
            "#,
        )
        .bind(profile_id)
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(dto.experience)
        .bind(&dto.location)
        .bind(dto.is_active)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update provider profile: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Provider profile not found".to_string()))?;

        if dto.name.is_some() || dto.email.is_some() {
            sqlx::query(
                r#"
                UPDATE users
                SET name = COALESCE($2, name),
                    email = COALESCE($3, email),
                    updated_at = NOW()
                WHERE id = $1
                "#,
            )
            .bind(user_id)
            .bind(&dto.name)
            .bind(&dto.email)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db) = e {
                    if db.is_unique_violation() {
                        return AppError::Conflict("Email is already in use".to_string());
                    }
                }
                tracing::error!("Failed to update provider user: {:?}", e);
                AppError::Database(e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit provider update: {:?}", e);
            AppError::Database(e)
        })?;

        self.profile_view(profile_id).await
    }

    /// Admin delete: removing the account cascades to the profile and all
    /// of its listings. Bookings and reviews are left in place.
    pub async fn admin_delete(&self, profile_id: Uuid) -> Result<()> {
        let user_id = sqlx::query_scalar::<_, Uuid>("SELECT user_id FROM providers WHERE id = $1")
            .bind(profile_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch provider profile: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound("Provider profile not found".to_string()))?;

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete provider user: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Provider deleted: profile={}, user={}",
            profile_id,
            user_id
        );
        Ok(())
    }

    async fn profile_view(&self, id: Uuid) -> Result<ProviderResponseDto> {
        let profile =
            sqlx::query_as::<_, ProviderResponseDto>(&format!("{PROFILE_SELECT} WHERE p.id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to fetch provider profile: {:?}", e);
                    AppError::Database(e)
                })?;

        profile.ok_or_else(|| AppError::NotFound("Provider profile not found".to_string()))
    }
}
