use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::guards::{AuthUser, PermissionGuard};
use crate::models::{Event, Permission};
use crate::services::{event_service::EventService, user_service::UserService};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct UpdateEventRequest {
    pub name: String,
}

/// POST /v1/events
/// Create an event; the caller becomes the owner and thereby holds
/// organizer standing without a role assignment row.
pub async fn create_event(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("event name must not be empty".into()));
    }

    // The propagated identity must map to a real account before it can own rows
    UserService::find(&state.db, user.id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let event = EventService::create(&state.db, user.id, name).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /v1/events
/// List the events the caller may act on; staff see every live event
pub async fn list_events(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Event>>, AppError> {
    let caller = UserService::find(&state.db, user.id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let events = if caller.is_staff() {
        EventService::list_all(&state.db).await?
    } else {
        EventService::list_for_user(&state.db, user.id).await?
    };

    Ok(Json(events))
}

/// GET /v1/events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    user: AuthUser,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Event>, AppError> {
    PermissionGuard::new(Permission::IsCoorganizer)
        .event(event_id)
        .enforce(&state.db, Some(&user))
        .await?;

    let event = EventService::find(&state.db, event_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(event))
}

/// PATCH /v1/events/{event_id}
pub async fn update_event(
    State(state): State<AppState>,
    user: AuthUser,
    Path(event_id): Path<Uuid>,
    Json(body): Json<UpdateEventRequest>,
) -> Result<Json<Event>, AppError> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("event name must not be empty".into()));
    }

    PermissionGuard::new(Permission::IsCoorganizer)
        .event(event_id)
        .enforce(&state.db, Some(&user))
        .await?;

    let event = EventService::update_name(&state.db, event_id, name).await?;
    Ok(Json(event))
}

/// DELETE /v1/events/{event_id}
/// Soft delete; organizer standing required
pub async fn delete_event(
    State(state): State<AppState>,
    user: AuthUser,
    Path(event_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    PermissionGuard::new(Permission::IsOrganizer)
        .event(event_id)
        .enforce(&state.db, Some(&user))
        .await?;

    EventService::soft_delete(&state.db, event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
