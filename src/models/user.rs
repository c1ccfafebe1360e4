use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Platform account with site-wide role flags.
///
/// Event-scoped standing is not stored here; see `models::role`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub is_admin: bool,
    pub is_super_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Staff accounts (admin or super admin) bypass event-scoped checks.
    pub fn is_staff(&self) -> bool {
        self.is_admin || self.is_super_admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool, is_super_admin: bool) -> User {
        User {
            id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            is_admin,
            is_super_admin,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_staff_covers_both_admin_flags() {
        assert!(!user(false, false).is_staff());
        assert!(user(true, false).is_staff());
        assert!(user(false, true).is_staff());
        assert!(user(true, true).is_staff());
    }
}
