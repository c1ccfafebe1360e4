//! Authorization guards that enforce permission checks at the type level
//! This prevents developers from accidentally bypassing authorization

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{EventRole, Permission};
use crate::services::permission_service::PermissionService;

/// Represents an authenticated caller extracted from the gateway-propagated
/// identity (set by the auth middleware)
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .extensions
            .get::<Uuid>()
            .cloned()
            .ok_or(AppError::Unauthorized)?;

        Ok(AuthUser { id: user_id })
    }
}

/// Verified event-scoped permission context for one (user, event) pair
#[derive(Debug, Clone)]
pub struct EventAccess {
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub owner_id: Uuid,
    pub role: Option<EventRole>,
    pub is_staff: bool,
}

impl EventAccess {
    /// Factory method to create and verify event access context.
    /// This performs ONE database query to load all permission context.
    pub async fn verify(db: &PgPool, user_id: Uuid, event_id: Uuid) -> Result<Self, AppError> {
        let row = sqlx::query(
            r#"
            SELECT
                e.owner_id,
                (u.is_admin OR u.is_super_admin) AS is_staff,
                uer.role_id
            FROM events e
            JOIN users u ON u.id = $1
            LEFT JOIN users_events_roles uer
              ON uer.event_id = e.id AND uer.user_id = $1
            WHERE e.id = $2 AND e.deleted_at IS NULL
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(db)
        .await?
        .ok_or(AppError::NotFound)?;

        let owner_id: Uuid = row.get("owner_id");
        let is_staff: bool = row.get("is_staff");
        let role_id: Option<i16> = row.get("role_id");
        let role = match role_id {
            Some(id) => Some(EventRole::from_id(id).ok_or(AppError::InvalidRole(id))?),
            None => None,
        };

        Ok(EventAccess {
            user_id,
            event_id,
            owner_id,
            role,
            is_staff,
        })
    }

    pub fn is_owner(&self) -> bool {
        self.user_id == self.owner_id
    }

    /// Role used for checks; the event owner counts as organizer even
    /// without an assignment row
    pub fn effective_role(&self) -> Option<EventRole> {
        if self.is_owner() {
            Some(EventRole::Organizer)
        } else {
            self.role
        }
    }

    /// Event-scoped checks only; global standing goes through
    /// `PermissionService::has_access`
    pub fn allows(&self, permission: Permission) -> bool {
        if !permission.is_event_scoped() {
            return false;
        }
        if self.is_staff {
            return true;
        }
        self.effective_role()
            .is_some_and(|role| role.satisfies(permission))
    }

    pub fn require(&self, permission: Permission) -> Result<(), AppError> {
        if self.allows(permission) {
            Ok(())
        } else {
            crate::metrics::record_access_denied(permission.as_str());
            Err(AppError::Forbidden)
        }
    }
}

type GuardPredicate = Box<dyn FnOnce() -> bool + Send>;

/// Named-permission check wrapped around a handler body.
///
/// Evaluation order:
/// 1. `leave_if` true: allow without any further checks, even for anonymous
///    callers (self-service endpoints)
/// 2. no authenticated caller: `Unauthorized`
/// 3. `check` present: its verdict replaces the named permission entirely;
///    false denies even when the named permission would have passed
/// 4. otherwise: the named permission against the role store
pub struct PermissionGuard {
    permission: Permission,
    event_id: Option<Uuid>,
    leave_if: Option<GuardPredicate>,
    check: Option<GuardPredicate>,
}

impl PermissionGuard {
    pub fn new(permission: Permission) -> Self {
        Self {
            permission,
            event_id: None,
            leave_if: None,
            check: None,
        }
    }

    /// Scope the named permission to an event
    pub fn event(mut self, event_id: Uuid) -> Self {
        self.event_id = Some(event_id);
        self
    }

    /// Bypass predicate; when true the whole check is skipped
    pub fn leave_if(mut self, predicate: impl FnOnce() -> bool + Send + 'static) -> Self {
        self.leave_if = Some(Box::new(predicate));
        self
    }

    /// Override predicate; when present its boolean decides alone
    pub fn check(mut self, predicate: impl FnOnce() -> bool + Send + 'static) -> Self {
        self.check = Some(Box::new(predicate));
        self
    }

    /// Run the check. `Ok(())` lets the handler body proceed; any denial is
    /// returned before the handler performs side effects.
    pub async fn enforce(self, db: &PgPool, user: Option<&AuthUser>) -> Result<(), AppError> {
        if let Some(leave_if) = self.leave_if {
            if leave_if() {
                return Ok(());
            }
        }

        let Some(user) = user else {
            return Err(AppError::Unauthorized);
        };

        if let Some(check) = self.check {
            if check() {
                return Ok(());
            }
            crate::metrics::record_access_denied(self.permission.as_str());
            return Err(AppError::Forbidden);
        }

        if PermissionService::has_access(db, user.id, self.permission, self.event_id).await? {
            Ok(())
        } else {
            crate::metrics::record_access_denied(self.permission.as_str());
            Err(AppError::Forbidden)
        }
    }
}
