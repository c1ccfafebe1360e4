use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::guards::{AuthUser, PermissionGuard};
use crate::models::{Event, Permission};
use crate::services::event_service::EventService;
use crate::state::AppState;

/// GET /v1/users/{user_id}/events
/// Events a user owns or holds a management role on. Self-service: callers
/// may always list their own; anyone else's listing needs admin standing.
pub async fn list_user_events(
    State(state): State<AppState>,
    user: Option<AuthUser>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Event>>, AppError> {
    let caller_id = user.as_ref().map(|u| u.id);
    PermissionGuard::new(Permission::IsAdmin)
        .leave_if(move || caller_id == Some(user_id))
        .enforce(&state.db, user.as_ref())
        .await?;

    let events = EventService::list_for_user(&state.db, user_id).await?;
    Ok(Json(events))
}
