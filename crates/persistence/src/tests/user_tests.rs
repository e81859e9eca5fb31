// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::PersistenceError;
use crate::tests::persistence_with_user;
use jadwal_domain::validate_schedule_entry;

#[test]
fn test_create_user_hashes_password() {
    let mut persistence = persistence_with_user();
    let user = persistence.get_user_by_username("u1").unwrap().unwrap();

    assert_eq!(user.user_id, "user-u1");
    assert_eq!(user.role, "user");
    assert!(user.is_active);
    assert!(user.running_text.is_empty());
    assert_ne!(user.password_hash, "secret-password");
    assert!(bcrypt::verify("secret-password", &user.password_hash).unwrap());
}

#[test]
fn test_duplicate_username_is_rejected() {
    let mut persistence = persistence_with_user();
    let result = persistence.create_user("user-other", "u1", "secret-password", "user");
    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_invalid_role_is_rejected_by_schema() {
    let mut persistence = persistence_with_user();
    assert!(
        persistence
            .create_user("user-x", "x", "secret-password", "superuser")
            .is_err()
    );
}

#[test]
fn test_deactivating_user_ends_sessions() {
    let mut persistence = persistence_with_user();
    persistence
        .create_session("tok-1", "user-u1", "2999-01-01T00:00:00.000000000Z")
        .unwrap();

    persistence.set_user_active("user-u1", false).unwrap();

    assert!(!persistence.get_user_by_id("user-u1").unwrap().unwrap().is_active);
    assert!(persistence.get_session_by_token("tok-1").unwrap().is_none());

    persistence.set_user_active("user-u1", true).unwrap();
    assert!(persistence.get_user_by_id("user-u1").unwrap().unwrap().is_active);
}

#[test]
fn test_missing_user_updates_report_not_found() {
    let mut persistence = persistence_with_user();
    assert!(matches!(
        persistence.set_user_active("user-ghost", false),
        Err(PersistenceError::UserNotFound(_))
    ));
    assert!(matches!(
        persistence.delete_user("user-ghost"),
        Err(PersistenceError::UserNotFound(_))
    ));
    assert!(matches!(
        persistence.set_running_text("user-ghost", "hello"),
        Err(PersistenceError::UserNotFound(_))
    ));
}

#[test]
fn test_running_text_round_trip() {
    let mut persistence = persistence_with_user();
    persistence
        .set_running_text("user-u1", "Selamat datang di Masjid Raya")
        .unwrap();
    let user = persistence.get_user_by_id("user-u1").unwrap().unwrap();
    assert_eq!(user.running_text, "Selamat datang di Masjid Raya");
}

#[test]
fn test_delete_user_cascades() {
    let mut persistence = persistence_with_user();
    persistence
        .create_session("tok-1", "user-u1", "2999-01-01T00:00:00.000000000Z")
        .unwrap();
    persistence
        .upsert_user_location("user-u1", "Bali", "Denpasar")
        .unwrap();
    persistence
        .replace_user_schedules(
            "user-u1",
            &[validate_schedule_entry("Fajr", "04:30", "2026-01-01").unwrap()],
        )
        .unwrap();

    persistence.delete_user("user-u1").unwrap();

    assert!(persistence.get_user_by_id("user-u1").unwrap().is_none());
    assert!(persistence.get_session_by_token("tok-1").unwrap().is_none());
    assert!(persistence.get_user_location("user-u1").unwrap().is_none());
    assert!(persistence.list_user_schedules("user-u1").unwrap().is_empty());
}

#[test]
fn test_expired_sessions_are_purged() {
    let mut persistence = persistence_with_user();
    persistence
        .create_session("old", "user-u1", "2020-01-01T00:00:00.000000000Z")
        .unwrap();
    persistence
        .create_session("fresh", "user-u1", "2999-01-01T00:00:00.000000000Z")
        .unwrap();

    let purged = persistence
        .delete_expired_sessions("2026-06-01T00:00:00.000000000Z")
        .unwrap();

    assert_eq!(purged, 1);
    assert!(persistence.get_session_by_token("old").unwrap().is_none());
    let fresh = persistence.get_session_by_token("fresh").unwrap().unwrap();
    assert_eq!(fresh.user_id, "user-u1");
}

#[test]
fn test_logout_deletes_only_that_session() {
    let mut persistence = persistence_with_user();
    persistence
        .create_session("a", "user-u1", "2999-01-01T00:00:00.000000000Z")
        .unwrap();
    persistence
        .create_session("b", "user-u1", "2999-01-01T00:00:00.000000000Z")
        .unwrap();

    assert_eq!(persistence.delete_session("a").unwrap(), 1);
    assert_eq!(persistence.delete_session("a").unwrap(), 0);
    assert!(persistence.get_session_by_token("b").unwrap().is_some());
}
