//! Event role vocabulary and role assignments
//!
//! Roles are scoped to a single event. Site-wide standing (admin, super admin)
//! lives on the user record, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Role a user can hold on a specific event.
///
/// Numeric ids are stable and stored in `users_events_roles.role_id`; the
/// string forms are used at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventRole {
    /// Full control over the event
    Organizer,
    /// Organizer-level management, except role administration
    Coorganizer,
    /// Manages tracks and their sessions
    TrackOrganizer,
    /// Moderates sessions and attendee content
    Moderator,
    /// Plain participant, no management standing
    Attendee,
    /// Handles check-in and registration desks
    Registrar,
}

impl EventRole {
    /// Parse a role from its stored numeric id
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(Self::Organizer),
            2 => Some(Self::Coorganizer),
            3 => Some(Self::TrackOrganizer),
            4 => Some(Self::Moderator),
            5 => Some(Self::Attendee),
            6 => Some(Self::Registrar),
            _ => None,
        }
    }

    /// Numeric id as stored in the database
    pub fn as_id(&self) -> i16 {
        match self {
            Self::Organizer => 1,
            Self::Coorganizer => 2,
            Self::TrackOrganizer => 3,
            Self::Moderator => 4,
            Self::Attendee => 5,
            Self::Registrar => 6,
        }
    }

    /// Parse role from its API string form
    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "organizer" => Some(Self::Organizer),
            "coorganizer" => Some(Self::Coorganizer),
            "track_organizer" => Some(Self::TrackOrganizer),
            "moderator" => Some(Self::Moderator),
            "attendee" => Some(Self::Attendee),
            "registrar" => Some(Self::Registrar),
            _ => None,
        }
    }

    /// String form used at the API boundary
    pub fn to_db(&self) -> &'static str {
        match self {
            Self::Organizer => "organizer",
            Self::Coorganizer => "coorganizer",
            Self::TrackOrganizer => "track_organizer",
            Self::Moderator => "moderator",
            Self::Attendee => "attendee",
            Self::Registrar => "registrar",
        }
    }

    /// Whether this role grants any management standing on the event.
    /// Attendees participate but manage nothing.
    pub fn is_management(&self) -> bool {
        !matches!(self, Self::Attendee)
    }

    /// Whether a holder of this role passes the given event-scoped check.
    ///
    /// Organizer passes everything; coorganizer passes everything except the
    /// organizer check itself; the specialist roles only pass their own check.
    /// Global permissions are never satisfied by an event role.
    pub fn satisfies(&self, permission: Permission) -> bool {
        match permission {
            Permission::IsOrganizer => matches!(self, Self::Organizer),
            Permission::IsCoorganizer => matches!(self, Self::Organizer | Self::Coorganizer),
            Permission::IsTrackOrganizer => {
                matches!(self, Self::Organizer | Self::Coorganizer | Self::TrackOrganizer)
            }
            Permission::IsModerator => {
                matches!(self, Self::Organizer | Self::Coorganizer | Self::Moderator)
            }
            Permission::IsRegistrar => {
                matches!(self, Self::Organizer | Self::Coorganizer | Self::Registrar)
            }
            Permission::IsAdmin | Permission::IsSuperAdmin => false,
        }
    }
}

impl fmt::Display for EventRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db())
    }
}

impl std::str::FromStr for EventRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db(s).ok_or_else(|| format!("Invalid role: {}", s))
    }
}

/// Closed set of checkable permissions.
///
/// The two admin permissions read flags off the user record; the rest require
/// an event id and consult the role assignment for (user, event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    IsSuperAdmin,
    IsAdmin,
    IsOrganizer,
    IsCoorganizer,
    IsTrackOrganizer,
    IsModerator,
    IsRegistrar,
}

impl Permission {
    /// Whether evaluating this permission requires an event id
    pub fn is_event_scoped(&self) -> bool {
        !matches!(self, Self::IsSuperAdmin | Self::IsAdmin)
    }

    /// Wire name as accepted by the access-check endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IsSuperAdmin => "is_super_admin",
            Self::IsAdmin => "is_admin",
            Self::IsOrganizer => "is_organizer",
            Self::IsCoorganizer => "is_coorganizer",
            Self::IsTrackOrganizer => "is_track_organizer",
            Self::IsModerator => "is_moderator",
            Self::IsRegistrar => "is_registrar",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "is_super_admin" => Ok(Self::IsSuperAdmin),
            "is_admin" => Ok(Self::IsAdmin),
            "is_organizer" => Ok(Self::IsOrganizer),
            "is_coorganizer" => Ok(Self::IsCoorganizer),
            "is_track_organizer" => Ok(Self::IsTrackOrganizer),
            "is_moderator" => Ok(Self::IsModerator),
            "is_registrar" => Ok(Self::IsRegistrar),
            other => Err(format!("Unrecognized permission: {}", other)),
        }
    }
}

/// Row binding a user to a role on a specific event.
/// At most one assignment exists per (user, event); re-granting overwrites.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RoleAssignment {
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub role_id: i16,
    pub created_at: DateTime<Utc>,
}

impl RoleAssignment {
    /// Decode the stored role id; None when the row carries an id this
    /// binary does not know
    pub fn role(&self) -> Option<EventRole> {
        EventRole::from_id(self.role_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_id_round_trip() {
        for role in [
            EventRole::Organizer,
            EventRole::Coorganizer,
            EventRole::TrackOrganizer,
            EventRole::Moderator,
            EventRole::Attendee,
            EventRole::Registrar,
        ] {
            assert_eq!(EventRole::from_id(role.as_id()), Some(role));
            assert_eq!(EventRole::from_db(role.to_db()), Some(role));
        }
        assert_eq!(EventRole::from_id(0), None);
        assert_eq!(EventRole::from_id(7), None);
    }

    #[test]
    fn test_stable_numeric_ids() {
        assert_eq!(EventRole::Organizer.as_id(), 1);
        assert_eq!(EventRole::Coorganizer.as_id(), 2);
        assert_eq!(EventRole::TrackOrganizer.as_id(), 3);
        assert_eq!(EventRole::Moderator.as_id(), 4);
        assert_eq!(EventRole::Attendee.as_id(), 5);
        assert_eq!(EventRole::Registrar.as_id(), 6);
    }

    #[test]
    fn test_organizer_satisfies_every_scoped_check() {
        let organizer = EventRole::Organizer;
        assert!(organizer.satisfies(Permission::IsOrganizer));
        assert!(organizer.satisfies(Permission::IsCoorganizer));
        assert!(organizer.satisfies(Permission::IsTrackOrganizer));
        assert!(organizer.satisfies(Permission::IsModerator));
        assert!(organizer.satisfies(Permission::IsRegistrar));
    }

    #[test]
    fn test_coorganizer_does_not_imply_organizer() {
        let coorganizer = EventRole::Coorganizer;
        assert!(!coorganizer.satisfies(Permission::IsOrganizer));
        assert!(coorganizer.satisfies(Permission::IsCoorganizer));
        assert!(coorganizer.satisfies(Permission::IsModerator));
        assert!(coorganizer.satisfies(Permission::IsRegistrar));
    }

    #[test]
    fn test_specialist_roles_are_parallel() {
        assert!(EventRole::Moderator.satisfies(Permission::IsModerator));
        assert!(!EventRole::Moderator.satisfies(Permission::IsTrackOrganizer));
        assert!(!EventRole::Moderator.satisfies(Permission::IsRegistrar));

        assert!(EventRole::TrackOrganizer.satisfies(Permission::IsTrackOrganizer));
        assert!(!EventRole::TrackOrganizer.satisfies(Permission::IsModerator));

        assert!(EventRole::Registrar.satisfies(Permission::IsRegistrar));
        assert!(!EventRole::Registrar.satisfies(Permission::IsModerator));
    }

    #[test]
    fn test_attendee_has_no_management_standing() {
        let attendee = EventRole::Attendee;
        assert!(!attendee.is_management());
        for permission in [
            Permission::IsOrganizer,
            Permission::IsCoorganizer,
            Permission::IsTrackOrganizer,
            Permission::IsModerator,
            Permission::IsRegistrar,
        ] {
            assert!(!attendee.satisfies(permission));
        }
    }

    #[test]
    fn test_event_roles_never_grant_global_permissions() {
        assert!(!EventRole::Organizer.satisfies(Permission::IsAdmin));
        assert!(!EventRole::Organizer.satisfies(Permission::IsSuperAdmin));
    }

    #[test]
    fn test_permission_wire_names() {
        for permission in [
            Permission::IsSuperAdmin,
            Permission::IsAdmin,
            Permission::IsOrganizer,
            Permission::IsCoorganizer,
            Permission::IsTrackOrganizer,
            Permission::IsModerator,
            Permission::IsRegistrar,
        ] {
            assert_eq!(permission.as_str().parse::<Permission>(), Ok(permission));
        }
        assert!("is_owner".parse::<Permission>().is_err());
    }
}
