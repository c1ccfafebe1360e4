//! Decision-table tests for permission evaluation
//!
//! These drive the pure evaluation core through the public API, covering the
//! global flags, owner derivation, and the role hierarchy without a database.

use chrono::Utc;
use event_service::models::{EventRole, Permission, User};
use event_service::services::permission_service::{evaluate, EventScope};
use uuid::Uuid;

fn user(is_admin: bool, is_super_admin: bool) -> User {
    User {
        id: Uuid::new_v4(),
        email: "organizer@example.com".to_string(),
        is_admin,
        is_super_admin,
        created_at: Utc::now(),
    }
}

fn scope(is_owner: bool, role: Option<EventRole>) -> EventScope {
    EventScope { is_owner, role }
}

#[test]
fn admin_flag_grants_is_admin_but_not_is_super_admin() {
    let admin = user(true, false);
    assert!(evaluate(&admin, Permission::IsAdmin, None));
    assert!(!evaluate(&admin, Permission::IsSuperAdmin, None));
}

#[test]
fn super_admin_passes_both_global_checks() {
    let super_admin = user(false, true);
    assert!(evaluate(&super_admin, Permission::IsSuperAdmin, None));
    assert!(evaluate(&super_admin, Permission::IsAdmin, None));
}

#[test]
fn regular_user_passes_no_global_check() {
    let regular = user(false, false);
    assert!(!evaluate(&regular, Permission::IsAdmin, None));
    assert!(!evaluate(&regular, Permission::IsSuperAdmin, None));
}

#[test]
fn event_creator_is_organizer_without_an_assignment_row() {
    let creator = user(false, false);
    let owned = scope(true, None);
    assert!(evaluate(&creator, Permission::IsOrganizer, Some(&owned)));
}

#[test]
fn organizer_assignment_grants_is_organizer() {
    let member = user(false, false);
    let assigned = scope(false, Some(EventRole::Organizer));
    assert!(evaluate(&member, Permission::IsOrganizer, Some(&assigned)));
}

#[test]
fn coorganizer_assignment_does_not_imply_is_organizer() {
    let member = user(false, false);
    let assigned = scope(false, Some(EventRole::Coorganizer));
    assert!(evaluate(&member, Permission::IsCoorganizer, Some(&assigned)));
    assert!(!evaluate(&member, Permission::IsOrganizer, Some(&assigned)));
}

#[test]
fn owner_with_registrar_assignment_keeps_organizer_standing() {
    // Creator of the event, later also granted the registrar role: both the
    // registrar check and the ownership-derived organizer check pass.
    let creator = user(false, false);
    let combined = scope(true, Some(EventRole::Registrar));
    assert!(evaluate(&creator, Permission::IsRegistrar, Some(&combined)));
    assert!(evaluate(&creator, Permission::IsOrganizer, Some(&combined)));
}

#[test]
fn registrar_assignment_alone_grants_only_registrar_level_access() {
    let member = user(false, false);
    let assigned = scope(false, Some(EventRole::Registrar));
    assert!(evaluate(&member, Permission::IsRegistrar, Some(&assigned)));
    assert!(!evaluate(&member, Permission::IsOrganizer, Some(&assigned)));
    assert!(!evaluate(&member, Permission::IsModerator, Some(&assigned)));
}

#[test]
fn moderator_and_track_organizer_are_distinct_roles() {
    let member = user(false, false);
    let moderator = scope(false, Some(EventRole::Moderator));
    assert!(evaluate(&member, Permission::IsModerator, Some(&moderator)));
    assert!(!evaluate(&member, Permission::IsTrackOrganizer, Some(&moderator)));

    let track_organizer = scope(false, Some(EventRole::TrackOrganizer));
    assert!(evaluate(&member, Permission::IsTrackOrganizer, Some(&track_organizer)));
    assert!(!evaluate(&member, Permission::IsModerator, Some(&track_organizer)));
}

#[test]
fn attendee_assignment_grants_no_management_access() {
    let member = user(false, false);
    let assigned = scope(false, Some(EventRole::Attendee));
    for permission in [
        Permission::IsOrganizer,
        Permission::IsCoorganizer,
        Permission::IsTrackOrganizer,
        Permission::IsModerator,
        Permission::IsRegistrar,
    ] {
        assert!(!evaluate(&member, permission, Some(&assigned)));
    }
}

#[test]
fn missing_event_or_assignment_evaluates_to_false() {
    let member = user(false, false);
    assert!(!evaluate(&member, Permission::IsOrganizer, None));

    let no_role = scope(false, None);
    assert!(!evaluate(&member, Permission::IsOrganizer, Some(&no_role)));
}

#[test]
fn staff_pass_event_scoped_checks_without_any_assignment() {
    let admin = user(true, false);
    assert!(evaluate(&admin, Permission::IsOrganizer, None));
    assert!(evaluate(&admin, Permission::IsRegistrar, Some(&scope(false, None))));
}

#[test]
fn permission_names_parse_and_unknown_names_are_rejected() {
    assert_eq!(
        "is_track_organizer".parse::<Permission>(),
        Ok(Permission::IsTrackOrganizer)
    );
    assert!("is_banana".parse::<Permission>().is_err());
    assert!("".parse::<Permission>().is_err());
}

#[test]
fn stored_role_ids_match_the_seeded_numbering() {
    assert_eq!(EventRole::from_id(1), Some(EventRole::Organizer));
    assert_eq!(EventRole::from_id(2), Some(EventRole::Coorganizer));
    assert_eq!(EventRole::from_id(6), Some(EventRole::Registrar));
    assert_eq!(EventRole::from_id(99), None);
}
