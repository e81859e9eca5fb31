// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for login, sessions and role checks.

use time::Duration;

use crate::tests::helpers::{ADMIN_PASSWORD, DISPLAY_PASSWORD, create_display_user, setup};
use crate::{
    ApiError, AuthError, AuthenticationService, AuthorizationService, LoginRequest, Role, login,
    logout,
};

fn request(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn test_login_returns_token_and_user() {
    let mut persistence = setup();

    let response = login(
        &mut persistence,
        &request("admin", ADMIN_PASSWORD),
        Duration::hours(24),
    )
    .unwrap();

    assert!(response.token.starts_with("session_"));
    assert_eq!(response.user.id, "admin-1");
    assert_eq!(response.user.role, "admin");
    assert!(response.user.is_active);

    let (user, data) =
        AuthenticationService::validate_session(&mut persistence, &response.token).unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(data.username, "admin");
    assert!(data.last_login_at.is_some());
}

#[test]
fn test_login_rejects_bad_credentials() {
    let mut persistence = setup();

    let wrong = login(
        &mut persistence,
        &request("admin", "not-the-password1"),
        Duration::hours(1),
    );
    assert_eq!(
        wrong,
        Err(ApiError::AuthenticationFailed {
            reason: String::from("Invalid credentials")
        })
    );

    let unknown = login(
        &mut persistence,
        &request("nobody", ADMIN_PASSWORD),
        Duration::hours(1),
    );
    assert!(matches!(unknown, Err(ApiError::AuthenticationFailed { .. })));
}

#[test]
fn test_login_requires_both_fields() {
    let mut persistence = setup();
    let result = login(&mut persistence, &request("admin", ""), Duration::hours(1));
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_inactive_account_cannot_log_in_or_use_sessions() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");

    let response = login(
        &mut persistence,
        &request("lobby", DISPLAY_PASSWORD),
        Duration::hours(1),
    )
    .unwrap();

    persistence.set_user_active(&display.id, false).unwrap();

    assert!(AuthenticationService::validate_session(&mut persistence, &response.token).is_err());
    assert_eq!(
        login(
            &mut persistence,
            &request("lobby", DISPLAY_PASSWORD),
            Duration::hours(1),
        ),
        Err(ApiError::AuthenticationFailed {
            reason: String::from("Account is inactive")
        })
    );
}

#[test]
fn test_logout_invalidates_token() {
    let mut persistence = setup();
    let response = login(
        &mut persistence,
        &request("admin", ADMIN_PASSWORD),
        Duration::hours(1),
    )
    .unwrap();

    logout(&mut persistence, &response.token).unwrap();

    assert_eq!(
        AuthenticationService::validate_session(&mut persistence, &response.token),
        Err(AuthError::AuthenticationFailed {
            reason: String::from("Invalid session token")
        })
    );
}

#[test]
fn test_expired_session_is_rejected_and_purged() {
    let mut persistence = setup();
    persistence
        .create_session("stale", "admin-1", "2020-01-01T00:00:00.000000000Z")
        .unwrap();
    persistence
        .create_session("older", "admin-1", "2019-01-01T00:00:00.000000000Z")
        .unwrap();

    assert_eq!(
        AuthenticationService::validate_session(&mut persistence, "stale"),
        Err(AuthError::AuthenticationFailed {
            reason: String::from("Session expired")
        })
    );
    assert!(persistence.get_session_by_token("stale").unwrap().is_none());

    assert_eq!(
        AuthenticationService::purge_expired_sessions(&mut persistence).unwrap(),
        1
    );
    assert!(persistence.get_session_by_token("older").unwrap().is_none());
}

#[test]
fn test_default_admin_is_created_once() {
    let mut persistence = setup();
    assert!(
        !AuthenticationService::ensure_default_admin(&mut persistence, "admin", "other-pass1")
            .unwrap()
    );
    assert_eq!(persistence.count_users_with_role("admin").unwrap(), 1);
}

#[test]
fn test_authorization_rules() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");
    let admin = crate::tests::helpers::admin();

    assert!(AuthorizationService::require_admin(&admin, "list_users").is_ok());
    assert_eq!(
        AuthorizationService::require_admin(&display, "list_users"),
        Err(AuthError::Unauthorized {
            action: String::from("list_users"),
            required_role: String::from("admin"),
        })
    );

    assert!(AuthorizationService::require_self_or_admin(&display, &display.id, "x").is_ok());
    assert!(AuthorizationService::require_self_or_admin(&admin, &display.id, "x").is_ok());
    assert!(AuthorizationService::require_self_or_admin(&display, "admin-1", "x").is_err());
}

#[test]
fn test_role_parsing_is_exact() {
    assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    assert_eq!("user".parse::<Role>().unwrap(), Role::User);
    assert!("Admin".parse::<Role>().is_err());
}
