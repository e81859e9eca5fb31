// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use std::str::FromStr;

use jadwal_persistence::{PersistenceError, SessionData, SqlitePersistence, UserData};
use time::format_description::well_known::Iso8601;
use time::{Duration, OffsetDateTime};
use tracing::{info, warn};

use crate::error::AuthError;

/// User ID given to the bootstrap administrator.
pub const DEFAULT_ADMIN_ID: &str = "admin-1";

/// Account roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Manages accounts and shared content.
    Admin,
    /// A display account: manages its own location, schedule and banner.
    User,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {other}"),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user whose bearer session has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    #[must_use]
    pub const fn new(id: String, username: String, role: Role) -> Self {
        Self { id, username, role }
    }

    /// Builds the authenticated identity from a stored account.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored role is not recognized.
    pub fn from_user(user: &UserData) -> Result<Self, AuthError> {
        Ok(Self::new(
            user.user_id.clone(),
            user.username.clone(),
            user.role.parse()?,
        ))
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Requires the admin role for `action`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` for non-admin users.
    pub fn require_admin(user: &AuthenticatedUser, action: &str) -> Result<(), AuthError> {
        match user.role {
            Role::Admin => Ok(()),
            Role::User => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("admin"),
            }),
        }
    }

    /// Allows admins to act on any account and users only on their own.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` when a non-admin targets another account.
    pub fn require_self_or_admin(
        user: &AuthenticatedUser,
        target_user_id: &str,
        action: &str,
    ) -> Result<(), AuthError> {
        if user.is_admin() || user.id == target_user_id {
            Ok(())
        } else {
            Self::require_admin(user, action)
        }
    }
}

/// Bearer-session authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Verifies credentials and opens a session lasting `ttl`.
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `expires_at`, `user_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if the username is unknown, the password does not
    /// match, the account is inactive, or storage fails.
    pub fn login(
        persistence: &mut SqlitePersistence,
        username: &str,
        password: &str,
        ttl: Duration,
    ) -> Result<(String, String, UserData), AuthError> {
        let user: UserData = persistence
            .get_user_by_username(username)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(Self::invalid_credentials)?;

        let matches = bcrypt::verify(password, &user.password_hash).map_err(|e| {
            AuthError::AuthenticationFailed {
                reason: format!("Password verification failed: {e}"),
            }
        })?;
        if !matches {
            warn!(username, "Rejected login with wrong password");
            return Err(Self::invalid_credentials());
        }

        if !user.is_active {
            warn!(username, "Rejected login for inactive account");
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Account is inactive"),
            });
        }

        let session_token = Self::generate_session_token();
        let expires_at = Self::format_timestamp(OffsetDateTime::now_utc() + ttl)?;

        persistence
            .create_session(&session_token, &user.user_id, &expires_at)
            .map_err(Self::map_persistence_error)?;
        persistence
            .update_last_login(&user.user_id)
            .map_err(Self::map_persistence_error)?;

        info!(user_id = %user.user_id, "User logged in");
        Ok((session_token, expires_at, user))
    }

    /// Validates a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is unknown or expired, or if its user
    /// no longer exists or has been deactivated.
    pub fn validate_session(
        persistence: &mut SqlitePersistence,
        session_token: &str,
    ) -> Result<(AuthenticatedUser, UserData), AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at = OffsetDateTime::parse(&session.expires_at, &Iso8601::DEFAULT).map_err(
            |e| AuthError::AuthenticationFailed {
                reason: format!("Failed to parse session expiration: {e}"),
            },
        )?;
        if OffsetDateTime::now_utc() > expires_at {
            persistence
                .delete_session(session_token)
                .map_err(Self::map_persistence_error)?;
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let user: UserData = persistence
            .get_user_by_id(&session.user_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("User not found"),
            })?;
        if !user.is_active {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Account is inactive"),
            });
        }

        Ok((AuthenticatedUser::from_user(&user)?, user))
    }

    /// Ends a session. Unknown tokens are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub fn logout(
        persistence: &mut SqlitePersistence,
        session_token: &str,
    ) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(Self::map_persistence_error)?;
        Ok(())
    }

    /// Creates the bootstrap administrator unless it already exists.
    ///
    /// Returns `true` when the account was created.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub fn ensure_default_admin(
        persistence: &mut SqlitePersistence,
        username: &str,
        password: &str,
    ) -> Result<bool, AuthError> {
        if persistence
            .get_user_by_id(DEFAULT_ADMIN_ID)
            .map_err(Self::map_persistence_error)?
            .is_some()
        {
            return Ok(false);
        }

        persistence
            .create_user(DEFAULT_ADMIN_ID, username, password, Role::Admin.as_str())
            .map_err(Self::map_persistence_error)?;
        info!(username, "Created default admin account");
        Ok(true)
    }

    /// Deletes every session whose expiry has passed.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub fn purge_expired_sessions(persistence: &mut SqlitePersistence) -> Result<usize, AuthError> {
        let now = Self::format_timestamp(OffsetDateTime::now_utc())?;
        let purged = persistence
            .delete_expired_sessions(&now)
            .map_err(Self::map_persistence_error)?;
        if purged > 0 {
            info!(purged, "Purged expired sessions");
        }
        Ok(purged)
    }

    fn generate_session_token() -> String {
        let timestamp = OffsetDateTime::now_utc().unix_timestamp_nanos();
        format!(
            "session_{timestamp}_{:016x}{:016x}",
            rand::random::<u64>(),
            rand::random::<u64>()
        )
    }

    fn format_timestamp(at: OffsetDateTime) -> Result<String, AuthError> {
        at.format(&Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format timestamp: {e}"),
            })
    }

    fn invalid_credentials() -> AuthError {
        AuthError::AuthenticationFailed {
            reason: String::from("Invalid credentials"),
        }
    }

    fn map_persistence_error(err: PersistenceError) -> AuthError {
        AuthError::AuthenticationFailed {
            reason: format!("Database error: {err}"),
        }
    }
}
