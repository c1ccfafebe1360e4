use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An event on the platform. The creator (owner) holds organizer standing
/// implicitly, without a role assignment row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Soft-delete marker; live events have NULL here
    pub deleted_at: Option<DateTime<Utc>>,
}
