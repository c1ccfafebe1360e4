use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::guards::AuthUser;
use crate::models::Permission;
use crate::services::permission_service::PermissionService;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AccessCheckQuery {
    pub permission: String,
    pub event_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct AccessCheckResponse {
    pub permission: &'static str,
    pub event_id: Option<Uuid>,
    pub allowed: bool,
}

/// GET /v1/access/check?permission=is_organizer&event_id=...
/// Ask whether the caller holds a permission. Anonymous callers get a plain
/// `false`; an unrecognized permission name is a client error, never a
/// silent deny.
pub async fn check_access(
    State(state): State<AppState>,
    user: Option<AuthUser>,
    Query(query): Query<AccessCheckQuery>,
) -> Result<Json<AccessCheckResponse>, AppError> {
    let permission: Permission = query
        .permission
        .parse()
        .map_err(|_| AppError::UnknownPermission(query.permission.clone()))?;

    let allowed = match &user {
        Some(user) => {
            PermissionService::has_access(&state.db, user.id, permission, query.event_id).await?
        }
        None => false,
    };

    Ok(Json(AccessCheckResponse {
        permission: permission.as_str(),
        event_id: query.event_id,
        allowed,
    }))
}
