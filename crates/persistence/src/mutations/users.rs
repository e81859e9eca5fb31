// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User, session and running-text mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{sessions, users};
use crate::error::PersistenceError;

/// Creates a user, hashing the password with bcrypt.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The stable user ID
/// * `username` - The login name, unique across users
/// * `password` - The plain-text password (will be hashed)
/// * `role` - `admin` or `user`
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the ID or username is
/// taken, or another error if hashing or the insert fails.
pub fn create_user(
    conn: &mut SqliteConnection,
    user_id: &str,
    username: &str,
    password: &str,
    role: &str,
) -> Result<(), PersistenceError> {
    info!(user_id, username, role, "Creating user");

    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    diesel::insert_into(users::table)
        .values((
            users::user_id.eq(user_id),
            users::username.eq(username),
            users::password_hash.eq(&password_hash),
            users::role.eq(role),
        ))
        .execute(conn)?;

    Ok(())
}

/// Sets whether a user may log in.
///
/// Deactivation also ends the user's sessions.
///
/// # Errors
///
/// Returns `PersistenceError::UserNotFound` if no user has this ID.
pub fn set_user_active(
    conn: &mut SqliteConnection,
    user_id: &str,
    is_active: bool,
) -> Result<(), PersistenceError> {
    info!(user_id, is_active, "Updating user active flag");

    conn.transaction(|conn| {
        let updated: usize = diesel::update(users::table)
            .filter(users::user_id.eq(user_id))
            .set(users::is_active.eq(i32::from(is_active)))
            .execute(conn)?;
        if updated == 0 {
            return Err(PersistenceError::UserNotFound(user_id.to_string()));
        }

        if !is_active {
            diesel::delete(sessions::table)
                .filter(sessions::user_id.eq(user_id))
                .execute(conn)?;
        }
        Ok(())
    })
}

/// Deletes a user. Sessions, saved location and override schedule rows
/// go with it through `ON DELETE CASCADE`.
///
/// # Errors
///
/// Returns `PersistenceError::UserNotFound` if no user has this ID.
pub fn delete_user(conn: &mut SqliteConnection, user_id: &str) -> Result<(), PersistenceError> {
    info!(user_id, "Deleting user");

    let deleted: usize = diesel::delete(users::table)
        .filter(users::user_id.eq(user_id))
        .execute(conn)?;
    if deleted == 0 {
        return Err(PersistenceError::UserNotFound(user_id.to_string()));
    }
    Ok(())
}

/// Records a successful login.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_last_login(conn: &mut SqliteConnection, user_id: &str) -> Result<(), PersistenceError> {
    debug!(user_id, "Updating last_login_at");

    diesel::update(users::table)
        .filter(users::user_id.eq(user_id))
        .set(users::last_login_at.eq(diesel::dsl::sql::<
            diesel::sql_types::Nullable<diesel::sql_types::Text>,
        >("CURRENT_TIMESTAMP")))
        .execute(conn)?;

    Ok(())
}

/// Replaces a user's running-text banner.
///
/// # Errors
///
/// Returns `PersistenceError::UserNotFound` if no user has this ID.
pub fn set_running_text(
    conn: &mut SqliteConnection,
    user_id: &str,
    running_text: &str,
) -> Result<(), PersistenceError> {
    debug!(user_id, length = running_text.len(), "Updating running text");

    let updated: usize = diesel::update(users::table)
        .filter(users::user_id.eq(user_id))
        .set(users::running_text.eq(running_text))
        .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::UserNotFound(user_id.to_string()));
    }
    Ok(())
}

/// Creates a bearer session.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The opaque token handed to the client
/// * `user_id` - The owning user
/// * `expires_at` - ISO 8601 UTC expiry
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    user_id: &str,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::user_id.eq(user_id),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    let session_id: i64 = get_last_insert_rowid(conn)?;
    debug!(session_id, user_id, expires_at, "Session created");
    Ok(session_id)
}

/// Deletes a session by token.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<usize, PersistenceError> {
    Ok(diesel::delete(sessions::table)
        .filter(sessions::session_token.eq(session_token))
        .execute(conn)?)
}

/// Deletes every session that expired before `now`.
///
/// Expiry values share one fixed-width ISO 8601 UTC layout, so string
/// comparison orders them chronologically.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_expired_sessions(
    conn: &mut SqliteConnection,
    now: &str,
) -> Result<usize, PersistenceError> {
    let rows_affected: usize = diesel::delete(sessions::table)
        .filter(sessions::expires_at.lt(now))
        .execute(conn)?;

    info!(count = rows_affected, "Deleted expired sessions");
    Ok(rows_affected)
}
