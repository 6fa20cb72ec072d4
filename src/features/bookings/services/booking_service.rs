use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::bookings::dtos::{
    AdminBookingDto, BookingResponseDto, BookingStatsDto, CreateBookingDto, CustomerBookingDto,
    ProviderBookingDto,
};
use crate::features::bookings::models::{Booking, BookingStatus};
use crate::features::services::models::Service;

const BOOKING_COLUMNS: &str = r#"
    id, customer_id, provider_id, service_id, date, time, location, status,
    created_at, updated_at
"#;

/// Admin projection resolving both parties by their dangling-safe references
const ADMIN_SELECT: &str = r#"
    SELECT b.id, b.customer_id, b.provider_id, b.service_id, b.date, b.time,
           b.location, b.status, b.created_at,
           u.name AS customer_name,
           u.email AS customer_email,
           p.name AS provider_name,
           p.email AS provider_email
    FROM bookings b
    LEFT JOIN users u ON u.id = b.customer_id
    LEFT JOIN providers p ON p.id = b.provider_id
"#;

/// The booking engine: slot claims and the status state machine
pub struct BookingService {
    pool: PgPool,
}

impl BookingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Book a slot for the acting customer.
    ///
    /// An existing booking on the same (provider, service, date, time)
    /// blocks the slot no matter who booked it or what status it reached;
    /// cancelled and rejected bookings keep blocking. The pre-check gives
    /// the friendly error, the unique slot index behind
    /// `ON CONFLICT DO NOTHING` makes the claim atomic under races.
    pub async fn create(
        &self,
        customer_id: Uuid,
        dto: CreateBookingDto,
    ) -> Result<BookingResponseDto> {
        let provider_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM providers WHERE id = $1)")
                .bind(dto.provider_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check provider: {:?}", e);
                    AppError::Database(e)
                })?;

        if !provider_exists {
            return Err(AppError::NotFound("Provider not found".to_string()));
        }

        let service = sqlx::query_as::<_, Service>(
            r#"
            SELECT id, provider_id, category_id, title, description, price, duration,
                   location, is_active, is_approved, created_at, updated_at
            FROM services
            WHERE id = $1
            "#,
        )
        .bind(dto.service_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch service: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

        if !service.is_visible() {
            return Err(AppError::Validation(
                "This service is currently unavailable or not approved for booking".to_string(),
            ));
        }

        let slot_taken = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM bookings
                WHERE provider_id = $1 AND service_id = $2 AND date = $3 AND time = $4
            )
            "#,
        )
        .bind(dto.provider_id)
        .bind(dto.service_id)
        .bind(dto.date)
        .bind(&dto.time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check slot availability: {:?}", e);
            AppError::Database(e)
        })?;

        if slot_taken {
            return Err(slot_conflict());
        }

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO bookings (customer_id, provider_id, service_id, date, time, location)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (provider_id, service_id, date, time) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(customer_id)
        .bind(dto.provider_id)
        .bind(dto.service_id)
        .bind(dto.date)
        .bind(&dto.time)
        .bind(&dto.location)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create booking: {:?}", e);
            AppError::Database(e)
        })?;

        // A concurrent request claimed the slot between the check and the
        // insert; the index turned the race into a no-op.
        let id = id.ok_or_else(slot_conflict)?;

        tracing::info!(
            "Booking created: id={}, provider={}, service={}, date={}, time={}",
            id,
            dto.provider_id,
            dto.service_id,
            dto.date,
            dto.time
        );

        self.enriched_view(id).await
    }

    /// List the acting customer's bookings, newest slot first
    pub async fn list_for_customer(&self, customer_id: Uuid) -> Result<Vec<CustomerBookingDto>> {
        let bookings = sqlx::query_as::<_, CustomerBookingDto>(
            r#"
            SELECT b.id, b.date, b.time, b.location, b.status, b.created_at,
                   s.title AS service_title,
                   s.price AS service_price,
                   p.name AS provider_name,
                   p.email AS provider_email,
                   p.phone AS provider_phone,
                   p.location AS provider_location
            FROM bookings b
            LEFT JOIN services s ON s.id = b.service_id
            LEFT JOIN providers p ON p.id = b.provider_id
            WHERE b.customer_id = $1
            ORDER BY b.date DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list customer bookings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(bookings)
    }

    /// Cancel one of the acting customer's bookings. Pending only.
    pub async fn cancel(&self, customer_id: Uuid, booking_id: Uuid) -> Result<()> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1 AND customer_id = $2"
        ))
        .bind(booking_id)
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch booking: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if !booking.status.can_transition_to(BookingStatus::Cancelled) {
            return Err(AppError::InvalidState(
                "Only pending bookings can be cancelled".to_string(),
            ));
        }

        self.set_status(booking_id, BookingStatus::Cancelled).await?;
        tracing::info!("Booking cancelled: id={}", booking_id);
        Ok(())
    }

    /// List bookings addressed to the acting provider
    pub async fn list_for_provider(&self, user_id: Uuid) -> Result<Vec<ProviderBookingDto>> {
        let provider_id = self.provider_id_for_user(user_id).await?;

        let bookings = sqlx::query_as::<_, ProviderBookingDto>(
            r#"
            SELECT b.id, b.date, b.time, b.location, b.status, b.created_at,
                   u.name AS customer_name,
                   u.email AS customer_email,
                   s.title AS service_title,
                   s.price AS service_price
            FROM bookings b
            LEFT JOIN users u ON u.id = b.customer_id
            LEFT JOIN services s ON s.id = b.service_id
            WHERE b.provider_id = $1
            ORDER BY b.date DESC
            "#,
        )
        .bind(provider_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list provider bookings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(bookings)
    }

    /// Provider accepts a pending booking
    pub async fn accept(&self, user_id: Uuid, booking_id: Uuid) -> Result<BookingResponseDto> {
        self.decide(user_id, booking_id, BookingStatus::Confirmed)
            .await
    }

    /// Provider rejects a pending booking
    pub async fn reject(&self, user_id: Uuid, booking_id: Uuid) -> Result<BookingResponseDto> {
        self.decide(user_id, booking_id, BookingStatus::Rejected)
            .await
    }

    async fn decide(
        &self,
        user_id: Uuid,
        booking_id: Uuid,
        target: BookingStatus,
    ) -> Result<BookingResponseDto> {
        let provider_id = self.provider_id_for_user(user_id).await?;

        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1 AND provider_id = $2"
        ))
        .bind(booking_id)
        .bind(provider_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch booking: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if !booking.status.can_transition_to(target) {
            let action = match target {
                BookingStatus::Confirmed => "accepted",
                BookingStatus::Rejected => "rejected",
                _ => "updated",
            };
            return Err(AppError::InvalidState(format!(
                "Only pending bookings can be {}",
                action
            )));
        }

        self.set_status(booking_id, target).await?;
        tracing::info!("Booking {}: id={}", target, booking_id);

        self.enriched_view(booking_id).await
    }

    /// Admin: list bookings, optionally filtered by status
    pub async fn admin_list(&self, status: Option<BookingStatus>) -> Result<Vec<AdminBookingDto>> {
        let bookings = sqlx::query_as::<_, AdminBookingDto>(&format!(
            r#"
            {ADMIN_SELECT}
            WHERE ($1::booking_status IS NULL OR b.status = $1)
            ORDER BY b.created_at DESC
            "#
        ))
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list bookings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(bookings)
    }

    /// Admin: one booking with both parties resolved
    pub async fn admin_get(&self, booking_id: Uuid) -> Result<AdminBookingDto> {
        let booking =
            sqlx::query_as::<_, AdminBookingDto>(&format!("{ADMIN_SELECT} WHERE b.id = $1"))
                .bind(booking_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to fetch booking: {:?}", e);
                    AppError::Database(e)
                })?;

        booking.ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }

    /// Admin status override. The transition graph still applies: terminal
    /// bookings stay immutable even for admins.
    pub async fn admin_update_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<AdminBookingDto> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch booking: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if !booking.status.can_transition_to(status) {
            return Err(AppError::InvalidState(format!(
                "Cannot change booking status from {} to {}",
                booking.status, status
            )));
        }

        self.set_status(booking_id, status).await?;
        tracing::info!("Booking status updated: id={}, status={}", booking_id, status);

        self.admin_get(booking_id).await
    }

    /// Admin: hard delete
    pub async fn admin_delete(&self, booking_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(booking_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete booking: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }

        tracing::info!("Booking deleted: id={}", booking_id);
        Ok(())
    }

    /// Admin: booking counts grouped by status
    pub async fn stats(&self) -> Result<Vec<BookingStatsDto>> {
        let stats = sqlx::query_as::<_, BookingStatsDto>(
            "SELECT status, COUNT(*) AS count FROM bookings GROUP BY status ORDER BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch booking stats: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(stats)
    }

    async fn set_status(&self, booking_id: Uuid, status: BookingStatus) -> Result<()> {
        sqlx::query("UPDATE bookings SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(booking_id)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update booking status: {:?}", e);
                AppError::Database(e)
            })?;
        Ok(())
    }

    async fn enriched_view(&self, id: Uuid) -> Result<BookingResponseDto> {
        let booking = sqlx::query_as::<_, BookingResponseDto>(
            r#"
            SELECT b.id, b.customer_id, b.provider_id, b.service_id, b.date, b.time,
                   b.location, b.status, b.created_at,
                   s.title AS service_title,
                   s.price AS service_price,
                   p.name AS provider_name,
                   c.name AS provider_category
            FROM bookings b
            LEFT JOIN services s ON s.id = b.service_id
            LEFT JOIN providers p ON p.id = b.provider_id
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE b.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch booking: {:?}", e);
            AppError::Database(e)
        })?;

        booking.ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }

    async fn provider_id_for_user(&self, user_id: Uuid) -> Result<Uuid> {
        let provider_id =
            sqlx::query_scalar::<_, Uuid>("SELECT id FROM providers WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to fetch provider profile: {:?}", e);
                    AppError::Database(e)
                })?;

        provider_id.ok_or_else(|| AppError::NotFound("Provider profile not found".to_string()))
    }
}

fn slot_conflict() -> AppError {
    AppError::Conflict(
        "This time slot has already been booked for the selected service and provider".to_string(),
    )
}
