use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a provider profile, the business-facing extension of
/// a provider-role user account.
#[derive(Debug, Clone, FromRow)]
pub struct Provider {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category_id: Uuid,
    pub experience: i32,
    pub location: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
