use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reviews::dtos::{CreateReviewDto, ReviewDetailDto, ReviewResponseDto};
use crate::features::reviews::models::Review;

const DETAIL_SELECT: &str = r#"
    SELECT r.id, r.service_id, r.customer_id, r.rating, r.comment, r.created_at,
           u.name AS customer_name,
           u.email AS customer_email,
           s.title AS service_title,
           c.name AS category_name
    FROM reviews r
    LEFT JOIN users u ON u.id = r.customer_id
    LEFT JOIN services s ON s.id = r.service_id
    LEFT JOIN categories c ON c.id = s.category_id
"#;

/// Service for posting and moderating reviews
pub struct ReviewService {
    pool: PgPool,
}

impl ReviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Post a review. One per (customer, service), checked by lookup.
    pub async fn add(
        &self,
        customer_id: Uuid,
        service_id: Uuid,
        dto: CreateReviewDto,
    ) -> Result<ReviewResponseDto> {
        let already_reviewed = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM reviews WHERE customer_id = $1 AND service_id = $2)",
        )
        .bind(customer_id)
        .bind(service_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check existing review: {:?}", e);
            AppError::Database(e)
        })?;

        if already_reviewed {
            return Err(AppError::Conflict(
                "You have already reviewed this service".to_string(),
            ));
        }

        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (service_id, customer_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING id, service_id, customer_id, rating, comment, created_at, updated_at
            "#,
        )
        .bind(service_id)
        .bind(customer_id)
        .bind(dto.rating)
        .bind(&dto.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create review: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Review added: id={}, service={}, rating={}",
            review.id,
            service_id,
            review.rating
        );

        Ok(review.into())
    }

    /// Delete the acting customer's review of a service
    pub async fn delete_own(&self, customer_id: Uuid, service_id: Uuid) -> Result<()> {
        let result =
            sqlx::query("DELETE FROM reviews WHERE customer_id = $1 AND service_id = $2")
                .bind(customer_id)
                .bind(service_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to delete review: {:?}", e);
                    AppError::Database(e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Review not found".to_string()));
        }

        tracing::info!(
            "Review deleted: customer={}, service={}",
            customer_id,
            service_id
        );
        Ok(())
    }

    /// Public: reviews of a service, newest first
    pub async fn list_by_service(&self, service_id: Uuid) -> Result<Vec<ReviewDetailDto>> {
        let reviews = sqlx::query_as::<_, ReviewDetailDto>(&format!(
            "{DETAIL_SELECT} WHERE r.service_id = $1 ORDER BY r.created_at DESC"
        ))
        .bind(service_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reviews: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(reviews)
    }

    /// Admin: every review
    pub async fn admin_list(&self) -> Result<Vec<ReviewDetailDto>> {
        let reviews = sqlx::query_as::<_, ReviewDetailDto>(&format!(
            "{DETAIL_SELECT} ORDER BY r.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reviews: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(reviews)
    }

    /// Admin: delete any review by id
    pub async fn admin_delete(&self, review_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(review_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete review: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Review not found".to_string()));
        }

        tracing::info!("Review deleted by admin: id={}", review_id);
        Ok(())
    }
}
