use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::{AdminSummaryDto, TopRatedServiceDto};
use crate::features::users::models::User;
use crate::shared::constants::DASHBOARD_LIST_LIMIT;

/// Service for the admin dashboard aggregation
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Platform-wide totals, the latest registrations, and the
    /// best-reviewed services.
    pub async fn summary(&self) -> Result<AdminSummaryDto> {
        let total_users = self
            .count("SELECT COUNT(*) FROM users WHERE role <> 'admin'")
            .await?;
        let total_providers = self
            .count("SELECT COUNT(*) FROM users WHERE role = 'provider'")
            .await?;
        let total_customers = self
            .count("SELECT COUNT(*) FROM users WHERE role = 'customer'")
            .await?;
        let total_services = self.count("SELECT COUNT(*) FROM services").await?;
        let total_approved_services = self
            .count("SELECT COUNT(*) FROM services WHERE is_approved = TRUE")
            .await?;
        let total_unapproved_services = self
            .count("SELECT COUNT(*) FROM services WHERE is_approved = FALSE")
            .await?;
        let total_bookings = self.count("SELECT COUNT(*) FROM bookings").await?;
        let total_reviews = self.count("SELECT COUNT(*) FROM reviews").await?;

        let recent_users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, role, status, created_at, updated_at
            FROM users
            WHERE role <> 'admin'
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(DASHBOARD_LIST_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch recent users: {:?}", e);
            AppError::Database(e)
        })?;

        let top_rated_services = sqlx::query_as::<_, TopRatedServiceDto>(
            r#"
            SELECT s.title,
                   AVG(r.rating)::float8 AS average_rating,
                   COUNT(r.id) AS review_count,
                   u.name AS provider_name,
                   c.name AS category_name
            FROM reviews r
            JOIN services s ON s.id = r.service_id
            LEFT JOIN providers p ON p.id = s.provider_id
            LEFT JOIN users u ON u.id = p.user_id
            LEFT JOIN categories c ON c.id = s.category_id
            GROUP BY s.id, s.title, u.name, c.name
            ORDER BY average_rating DESC, review_count DESC
            LIMIT $1
            "#,
        )
        .bind(DASHBOARD_LIST_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch top rated services: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(AdminSummaryDto {
            total_users,
            total_providers,
            total_customers,
            total_services,
            total_approved_services,
            total_unapproved_services,
            total_bookings,
            total_reviews,
            recent_users: recent_users.into_iter().map(|u| u.into()).collect(),
            top_rated_services,
        })
    }

    async fn count(&self, sql: &str) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to run dashboard count: {:?}", e);
                AppError::Database(e)
            })
    }
}
