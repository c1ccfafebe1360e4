use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Event, EventRole};

pub struct EventService;

impl EventService {
    /// Create an event; the caller becomes the owner
    pub async fn create(
        db: &Pool<Postgres>,
        owner_id: Uuid,
        name: &str,
    ) -> Result<Event, AppError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, owner_id)
            VALUES ($1, $2)
            RETURNING id, name, owner_id, created_at, deleted_at
            "#,
        )
        .bind(name)
        .bind(owner_id)
        .fetch_one(db)
        .await?;

        Ok(event)
    }

    pub async fn find(db: &Pool<Postgres>, event_id: Uuid) -> Result<Option<Event>, AppError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, owner_id, created_at, deleted_at
            FROM events
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(event_id)
        .fetch_optional(db)
        .await?;

        Ok(event)
    }

    pub async fn update_name(
        db: &Pool<Postgres>,
        event_id: Uuid,
        name: &str,
    ) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET name = $2
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, owner_id, created_at, deleted_at
            "#,
        )
        .bind(event_id)
        .bind(name)
        .fetch_optional(db)
        .await?
        .ok_or(AppError::NotFound)
    }

    /// Soft delete; already-deleted events report NotFound
    pub async fn soft_delete(db: &Pool<Postgres>, event_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE events SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(event_id)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// All live events, newest first. Staff-only listing.
    pub async fn list_all(db: &Pool<Postgres>) -> Result<Vec<Event>, AppError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, owner_id, created_at, deleted_at
            FROM events
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;

        Ok(events)
    }

    /// Events the user may act on: owned, or held under a management role.
    /// Attendee-only events are excluded. Empty is a normal answer.
    pub async fn list_for_user(
        db: &Pool<Postgres>,
        user_id: Uuid,
    ) -> Result<Vec<Event>, AppError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT e.id, e.name, e.owner_id, e.created_at, e.deleted_at
            FROM events e
            LEFT JOIN users_events_roles uer
              ON uer.event_id = e.id AND uer.user_id = $1
            WHERE e.deleted_at IS NULL
              AND (e.owner_id = $1 OR (uer.role_id IS NOT NULL AND uer.role_id <> $2))
            ORDER BY e.created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(EventRole::Attendee.as_id())
        .fetch_all(db)
        .await?;

        Ok(events)
    }
}
