use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a service listing
#[derive(Debug, Clone, FromRow)]
pub struct Service {
    pub id: Uuid,
    pub provider_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub duration: String,
    pub location: String,
    pub is_active: bool,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    /// A listing is bookable and publicly visible only when the owner keeps
    /// it active and an admin has approved it.
    pub fn is_visible(&self) -> bool {
        self.is_active && self.is_approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(is_active: bool, is_approved: bool) -> Service {
        Service {
            id: Uuid::new_v4(),
            provider_id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            title: "Pipe repair".to_string(),
            description: None,
            price: Decimal::new(5000, 2),
            duration: "1 hour".to_string(),
            location: "Springfield".to_string(),
            is_active,
            is_approved,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_visibility_requires_both_flags() {
        assert!(service(true, true).is_visible());
        assert!(!service(true, false).is_visible());
        assert!(!service(false, true).is_visible());
        assert!(!service(false, false).is_visible());
    }
}
