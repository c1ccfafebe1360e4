use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::guards::{AuthUser, EventAccess, PermissionGuard};
use crate::models::{EventRole, Permission, RoleAssignment};
use crate::services::{role_service::RoleService, user_service::UserService};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GrantRoleRequest {
    pub user_id: Uuid,
    pub role: EventRole,
}

#[derive(Serialize)]
pub struct RoleAssignmentResponse {
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub role_id: i16,
    pub role: Option<&'static str>,
    pub created_at: DateTime<Utc>,
}

impl From<RoleAssignment> for RoleAssignmentResponse {
    fn from(assignment: RoleAssignment) -> Self {
        Self {
            user_id: assignment.user_id,
            event_id: assignment.event_id,
            role_id: assignment.role_id,
            role: assignment.role().map(|r| r.to_db()),
            created_at: assignment.created_at,
        }
    }
}

/// POST /v1/events/{event_id}/roles
/// Grant (or overwrite) a role on the event. Organizer standing is required,
/// and the owner cannot be assigned a role: their organizer standing is
/// derived from ownership, not stored.
pub async fn grant_role(
    State(state): State<AppState>,
    user: AuthUser,
    Path(event_id): Path<Uuid>,
    Json(body): Json<GrantRoleRequest>,
) -> Result<(StatusCode, Json<RoleAssignmentResponse>), AppError> {
    let access = EventAccess::verify(&state.db, user.id, event_id).await?;

    let can_manage = access.allows(Permission::IsOrganizer);
    let target = body.user_id;
    let owner_id = access.owner_id;
    PermissionGuard::new(Permission::IsOrganizer)
        .event(event_id)
        .check(move || can_manage && target != owner_id)
        .enforce(&state.db, Some(&user))
        .await?;

    UserService::find(&state.db, body.user_id)
        .await?
        .ok_or_else(|| AppError::BadRequest("target user does not exist".into()))?;

    let assignment = RoleService::grant(&state.db, event_id, body.user_id, body.role).await?;
    Ok((StatusCode::CREATED, Json(assignment.into())))
}

/// GET /v1/events/{event_id}/roles
pub async fn list_event_roles(
    State(state): State<AppState>,
    user: AuthUser,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<RoleAssignmentResponse>>, AppError> {
    let access = EventAccess::verify(&state.db, user.id, event_id).await?;
    access.require(Permission::IsCoorganizer)?;

    let assignments = RoleService::list_for_event(&state.db, event_id).await?;
    Ok(Json(assignments.into_iter().map(Into::into).collect()))
}
