//! Permission evaluation over site-wide flags and event role assignments
//!
//! The decision core is pure; all I/O happens in `has_access`, which performs
//! at most one role-lookup read per check.

use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{EventRole, Permission, User};
use crate::services::user_service::UserService;

/// Role context for one (user, event) pair, loaded by a single lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventScope {
    /// Whether the user created the event
    pub is_owner: bool,
    /// Assigned role, if a `users_events_roles` row exists
    pub role: Option<EventRole>,
}

impl EventScope {
    /// The owner counts as organizer even without an assignment row
    pub fn effective_role(&self) -> Option<EventRole> {
        if self.is_owner {
            Some(EventRole::Organizer)
        } else {
            self.role
        }
    }
}

/// Pure decision core, exhaustive over the permission set.
///
/// `scope` is `None` when the event does not exist or the caller holds
/// nothing on it; that evaluates to false, never an error.
pub fn evaluate(user: &User, permission: Permission, scope: Option<&EventScope>) -> bool {
    match permission {
        Permission::IsSuperAdmin => user.is_super_admin,
        // Super admins pass plain admin checks
        Permission::IsAdmin => user.is_admin || user.is_super_admin,
        Permission::IsOrganizer
        | Permission::IsCoorganizer
        | Permission::IsTrackOrganizer
        | Permission::IsModerator
        | Permission::IsRegistrar => {
            if user.is_staff() {
                return true;
            }
            scope
                .and_then(|scope| scope.effective_role())
                .is_some_and(|role| role.satisfies(permission))
        }
    }
}

pub struct PermissionService;

impl PermissionService {
    /// Evaluate a permission for a user.
    ///
    /// An unknown caller id fails closed (false). A missing `event_id` for an
    /// event-scoped permission is a client error, not a denial.
    pub async fn has_access(
        db: &Pool<Postgres>,
        user_id: Uuid,
        permission: Permission,
        event_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let Some(user) = UserService::find(db, user_id).await? else {
            return Ok(false);
        };

        if !permission.is_event_scoped() {
            return Ok(evaluate(&user, permission, None));
        }

        let event_id = event_id.ok_or(AppError::MissingEventId)?;

        // Staff need no role lookup
        if user.is_staff() {
            return Ok(true);
        }

        let scope = Self::load_scope(db, user_id, event_id).await?;
        Ok(evaluate(&user, permission, scope.as_ref()))
    }

    /// Load the event owner and the (user, event) role assignment in one
    /// query. A missing event or assignment is non-fatal.
    pub async fn load_scope(
        db: &Pool<Postgres>,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<EventScope>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT
                (e.owner_id = $1) AS is_owner,
                uer.role_id
            FROM events e
            LEFT JOIN users_events_roles uer
              ON uer.event_id = e.id AND uer.user_id = $1
            WHERE e.id = $2 AND e.deleted_at IS NULL
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(db)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let is_owner: bool = row.get("is_owner");
        let role_id: Option<i16> = row.get("role_id");
        let role = match role_id {
            Some(id) => Some(EventRole::from_id(id).ok_or(AppError::InvalidRole(id))?),
            None => None,
        };

        Ok(Some(EventScope { is_owner, role }))
    }
}
