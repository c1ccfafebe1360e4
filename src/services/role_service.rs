use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{EventRole, RoleAssignment};

pub struct RoleService;

impl RoleService {
    /// Grant a role on an event. At most one assignment exists per
    /// (user, event); granting again overwrites the previous role.
    pub async fn grant(
        db: &Pool<Postgres>,
        event_id: Uuid,
        user_id: Uuid,
        role: EventRole,
    ) -> Result<RoleAssignment, AppError> {
        let assignment = sqlx::query_as::<_, RoleAssignment>(
            r#"
            INSERT INTO users_events_roles (user_id, event_id, role_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, event_id) DO UPDATE SET role_id = EXCLUDED.role_id
            RETURNING user_id, event_id, role_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .bind(role.as_id())
        .fetch_one(db)
        .await?;

        Ok(assignment)
    }

    pub async fn list_for_event(
        db: &Pool<Postgres>,
        event_id: Uuid,
    ) -> Result<Vec<RoleAssignment>, AppError> {
        let assignments = sqlx::query_as::<_, RoleAssignment>(
            r#"
            SELECT user_id, event_id, role_id, created_at
            FROM users_events_roles
            WHERE event_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(db)
        .await?;

        Ok(assignments)
    }
}
