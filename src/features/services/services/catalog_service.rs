use std::sync::Arc;

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::services::CategoryService;
use crate::features::providers::models::Provider;
use crate::features::services::dtos::{
    AdminServiceResponseDto, CreateServiceDto, PublicServiceDto, SearchServicesQuery,
    ServiceResponseDto, UpdateServiceDto,
};

/// Provider-facing projection with the category name joined in
const OWNER_SELECT: &str = r#"
    SELECT s.id, s.provider_id, s.category_id, s.title, s.description, s.price,
           s.duration, s.location, s.is_active, s.is_approved,
           c.name AS category_name
    FROM services s
    LEFT JOIN categories c ON c.id = s.category_id
"#;

/// Customer-facing projection; callers append the visibility predicate
const PUBLIC_SELECT: &str = r#"
    SELECT s.id, s.provider_id, s.title, s.description, s.price, s.duration,
           s.location,
           c.name AS category_name,
           p.name AS provider_name,
           p.location AS provider_location
    FROM services s
    LEFT JOIN categories c ON c.id = s.category_id
    JOIN providers p ON p.id = s.provider_id
"#;

/// Admin projection with the owning account joined in
const ADMIN_SELECT: &str = r#"
    SELECT s.id, s.provider_id, s.title, s.description, s.price, s.duration,
           s.location, s.is_active, s.is_approved,
           c.name AS category_name,
           u.name AS provider_name,
           u.email AS provider_email
    FROM services s
    LEFT JOIN categories c ON c.id = s.category_id
    JOIN providers p ON p.id = s.provider_id
    JOIN users u ON u.id = p.user_id
"#;

/// Service for listing lifecycle and catalog reads
pub struct CatalogService {
    pool: PgPool,
    categories: Arc<CategoryService>,
}

impl CatalogService {
    pub fn new(pool: PgPool, categories: Arc<CategoryService>) -> Self {
        Self { pool, categories }
    }

    /// Create a listing for the acting provider. New listings start active
    /// but unapproved, so they stay invisible until an admin signs off.
    pub async fn create(&self, user_id: Uuid, dto: CreateServiceDto) -> Result<ServiceResponseDto> {
        let provider = self.provider_profile(user_id).await?;

        if dto.price <= Decimal::ZERO {
            return Err(AppError::Validation(
                "Price must be greater than zero".to_string(),
            ));
        }

        // The profile's category reference may dangle if an admin deleted
        // the category; resolve it before accepting the listing.
        let category = self
            .categories
            .resolve(&provider.category_id.to_string())
            .await
            .map_err(|e| match e {
                AppError::Validation(_) => {
                    AppError::Validation("Category not found in system".to_string())
                }
                other => other,
            })?;

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO services (provider_id, category_id, title, description, price, duration, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(provider.id)
        .bind(category.id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.price)
        .bind(&dto.duration)
        .bind(&provider.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create service: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Service created: id={}, provider={}", id, provider.id);

        self.owner_view(id).await
    }

    /// List the acting provider's own listings, approved or not
    pub async fn list_for_provider(&self, user_id: Uuid) -> Result<Vec<ServiceResponseDto>> {
        let provider = self.provider_profile(user_id).await?;

        let services = sqlx::query_as::<_, ServiceResponseDto>(&format!(
            "{OWNER_SELECT} WHERE s.provider_id = $1 ORDER BY s.created_at DESC"
        ))
        .bind(provider.id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list provider services: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(services)
    }

    /// Partial update scoped to the acting provider's listings
    pub async fn update(
        &self,
        user_id: Uuid,
        service_id: Uuid,
        dto: UpdateServiceDto,
    ) -> Result<ServiceResponseDto> {
        let provider = self.provider_profile(user_id).await?;

        if let Some(price) = dto.price {
            if price <= Decimal::ZERO {
                return Err(AppError::Validation(
                    "Price must be greater than zero".to_string(),
                ));
            }
        }

        let updated = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE services
            SET title = COALESCE($3, title),
                description = COALESCE($4, description),
                price = COALESCE($5, price),
                duration = COALESCE($6, duration),
                updated_at = NOW()
            WHERE id = $1 AND provider_id = $2
            RETURNING id
            "#,
        )
        .bind(service_id)
        .bind(provider.id)
        .bind(dto.title)
        .bind(dto.description)
        .bind(dto.price)
        .bind(dto.duration)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update service: {:?}", e);
            AppError::Database(e)
        })?;

        let id = updated.ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;
        self.owner_view(id).await
    }

    /// Delete scoped to the acting provider's listings
    pub async fn delete(&self, user_id: Uuid, service_id: Uuid) -> Result<()> {
        let provider = self.provider_profile(user_id).await?;

        let result = sqlx::query("DELETE FROM services WHERE id = $1 AND provider_id = $2")
            .bind(service_id)
            .bind(provider.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete service: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Service not found".to_string()));
        }

        tracing::info!("Service deleted: id={}", service_id);
        Ok(())
    }

    /// Public catalog: visible listings only
    pub async fn list_visible(&self) -> Result<Vec<PublicServiceDto>> {
        let services = sqlx::query_as::<_, PublicServiceDto>(&format!(
            "{PUBLIC_SELECT} WHERE s.is_active = TRUE AND s.is_approved = TRUE ORDER BY s.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list services: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(services)
    }

    /// Public catalog scoped to one provider, visible listings only
    pub async fn list_visible_by_provider(
        &self,
        provider_id: Uuid,
    ) -> Result<Vec<PublicServiceDto>> {
        let services = sqlx::query_as::<_, PublicServiceDto>(&format!(
            r#"
            {PUBLIC_SELECT}
            WHERE s.provider_id = $1 AND s.is_active = TRUE AND s.is_approved = TRUE
            ORDER BY s.created_at DESC
            "#
        ))
        .bind(provider_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list provider services: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(services)
    }

    /// Filtered public search over visible listings. An unresolvable
    /// category filter yields an empty result set rather than an error.
    pub async fn search(&self, query: SearchServicesQuery) -> Result<Vec<PublicServiceDto>> {
        let category_id = match &query.category {
            Some(reference) => match self.categories.resolve(reference).await {
                Ok(category) => Some(category.id),
                Err(AppError::Validation(_)) => return Ok(Vec::new()),
                Err(e) => return Err(e),
            },
            None => None,
        };

        let keyword_pattern = query.keyword.as_ref().map(|k| format!("%{}%", k));

        let services = sqlx::query_as::<_, PublicServiceDto>(&format!(
            r#"
            {PUBLIC_SELECT}
            WHERE s.is_active = TRUE AND s.is_approved = TRUE
            AND ($1::uuid IS NULL OR s.category_id = $1)
            AND ($2::text IS NULL OR s.location = $2)
            AND ($3::text IS NULL OR s.title ILIKE $3 OR s.description ILIKE $3)
            AND ($4::numeric IS NULL OR s.price >= $4)
            AND ($5::numeric IS NULL OR s.price <= $5)
            ORDER BY s.created_at DESC
            "#
        ))
        .bind(category_id)
        .bind(&query.location)
        .bind(&keyword_pattern)
        .bind(query.min_price)
        .bind(query.max_price)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search services: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(services)
    }

    /// Admin: every listing with its owner
    pub async fn admin_list(&self) -> Result<Vec<AdminServiceResponseDto>> {
        let services = sqlx::query_as::<_, AdminServiceResponseDto>(&format!(
            "{ADMIN_SELECT} ORDER BY s.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list services for admin: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(services)
    }

    /// Admin: listings awaiting approval
    pub async fn admin_list_unapproved(&self) -> Result<Vec<AdminServiceResponseDto>> {
        let services = sqlx::query_as::<_, AdminServiceResponseDto>(&format!(
            "{ADMIN_SELECT} WHERE s.is_approved = FALSE ORDER BY s.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list unapproved services: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(services)
    }

    /// Admin partial update of any listing
    pub async fn admin_update(
        &self,
        service_id: Uuid,
        dto: UpdateServiceDto,
    ) -> Result<ServiceResponseDto> {
        if let Some(price) = dto.price {
            if price <= Decimal::ZERO {
                return Err(AppError::Validation(
                    "Price must be greater than zero".to_string(),
                ));
            }
        }

        let updated = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE services
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                duration = COALESCE($5, duration),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(service_id)
        .bind(dto.title)
        .bind(dto.description)
        .bind(dto.price)
        .bind(dto.duration)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update service: {:?}", e);
            AppError::Database(e)
        })?;

        let id = updated.ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;
        self.owner_view(id).await
    }

    /// Admin delete of any listing
    pub async fn admin_delete(&self, service_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(service_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete service: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Service not found".to_string()));
        }

        tracing::info!("Service deleted by admin: id={}", service_id);
        Ok(())
    }

    /// Admin-only approval flip. Toggling twice restores the original state.
    pub async fn toggle_approval(&self, service_id: Uuid) -> Result<bool> {
        let approved = sqlx::query_scalar::<_, bool>(
            r#"
            UPDATE services
            SET is_approved = NOT is_approved, updated_at = NOW()
            WHERE id = $1
            RETURNING is_approved
            "#,
        )
        .bind(service_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to toggle service approval: {:?}", e);
            AppError::Database(e)
        })?;

        let approved =
            approved.ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;
        tracing::info!(
            "Service approval toggled: id={}, approved={}",
            service_id,
            approved
        );
        Ok(approved)
    }

    /// Admin-only activation flip
    pub async fn toggle_activation(&self, service_id: Uuid) -> Result<bool> {
        let active = sqlx::query_scalar::<_, bool>(
            r#"
            UPDATE services
            SET is_active = NOT is_active, updated_at = NOW()
            WHERE id = $1
            RETURNING is_active
            "#,
        )
        .bind(service_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to toggle service activation: {:?}", e);
            AppError::Database(e)
        })?;

        let active = active.ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;
        tracing::info!(
            "Service activation toggled: id={}, active={}",
            service_id,
            active
        );
        Ok(active)
    }

    async fn owner_view(&self, id: Uuid) -> Result<ServiceResponseDto> {
        let service =
            sqlx::query_as::<_, ServiceResponseDto>(&format!("{OWNER_SELECT} WHERE s.id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to fetch service: {:?}", e);
                    AppError::Database(e)
                })?;

        service.ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    async fn provider_profile(&self, user_id: Uuid) -> Result<Provider> {
        let provider = sqlx::query_as::<_, Provider>(
            r#"
            SELECT id, user_id, name, email, phone, category_id, experience,
                   location, is_active, created_at, updated_at
            FROM providers
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch provider profile: {:?}", e);
            AppError::Database(e)
        })?;

        provider.ok_or_else(|| AppError::NotFound("Provider profile not found".to_string()))
    }
}
