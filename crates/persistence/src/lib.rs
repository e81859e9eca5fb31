// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Jadwal display backend.
//!
//! All state lives in a single `SQLite` database accessed through Diesel:
//!
//! - `users` and `sessions`: accounts, bearer tokens, running text
//! - `prayer_schedules`: the shared reference schedule, one row per
//!   `(city, schedule_date, prayer_name)`
//! - `user_prayer_schedules`: each user's override list from `POST /sync`
//! - `user_locations`: one saved location per user
//! - `contents`: display content metadata
//!
//! The schema is created by embedded migrations when a connection opens.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` opens a fresh shared-cache in-memory
//! database with a unique name, so tests never see each other's rows.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use jadwal::CitySchedule;
use jadwal_domain::ScheduleEntry;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{
    ContentData, ContentFields, ScheduleData, SessionData, UserData, UserLocationData,
    UserScheduleData,
};
pub use error::PersistenceError;

/// Type alias kept for call sites that name the backend explicitly.
pub type SqlitePersistence = Persistence;

/// Persistence adapter over one `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:memdb_jadwal_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Creates a user with a bcrypt-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the ID or username is taken.
    pub fn create_user(
        &mut self,
        user_id: &str,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<(), PersistenceError> {
        mutations::users::create_user(&mut self.conn, user_id, username, password, role)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user_by_id(&mut self, user_id: &str) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_id(&mut self.conn, user_id)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_username(&mut self.conn, username)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_users(&mut self) -> Result<Vec<UserData>, PersistenceError> {
        queries::users::list_users(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_users_with_role(&mut self, role: &str) -> Result<i64, PersistenceError> {
        queries::users::count_users_with_role(&mut self.conn, role)
    }

    /// Activates or deactivates a user. Deactivation ends their sessions.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UserNotFound` if no user has this ID.
    pub fn set_user_active(&mut self, user_id: &str, is_active: bool) -> Result<(), PersistenceError> {
        mutations::users::set_user_active(&mut self.conn, user_id, is_active)
    }

    /// Deletes a user and everything that references them.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UserNotFound` if no user has this ID.
    pub fn delete_user(&mut self, user_id: &str) -> Result<(), PersistenceError> {
        mutations::users::delete_user(&mut self.conn, user_id)
    }

    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn update_last_login(&mut self, user_id: &str) -> Result<(), PersistenceError> {
        mutations::users::update_last_login(&mut self.conn, user_id)
    }

    /// # Errors
    ///
    /// Returns `PersistenceError::UserNotFound` if no user has this ID.
    pub fn set_running_text(
        &mut self,
        user_id: &str,
        running_text: &str,
    ) -> Result<(), PersistenceError> {
        mutations::users::set_running_text(&mut self.conn, user_id, running_text)
    }

    // ========================================================================
    // Sessions
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_session(
        &mut self,
        session_token: &str,
        user_id: &str,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::users::create_session(&mut self.conn, session_token, user_id, expires_at)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::users::get_session_by_token(&mut self.conn, session_token)
    }

    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<usize, PersistenceError> {
        mutations::users::delete_session(&mut self.conn, session_token)
    }

    /// Deletes sessions whose ISO 8601 expiry is before `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_expired_sessions(&mut self, now: &str) -> Result<usize, PersistenceError> {
        mutations::users::delete_expired_sessions(&mut self.conn, now)
    }

    // ========================================================================
    // Reference schedule
    // ========================================================================

    /// Upserts one generated city-year in its own transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the city's previous rows remain.
    pub fn upsert_city_schedule(&mut self, schedule: &CitySchedule) -> Result<usize, PersistenceError> {
        mutations::schedules::upsert_city_schedule(&mut self.conn, schedule)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_city_schedules(
        &mut self,
        city: &str,
        date: Option<&str>,
    ) -> Result<Vec<ScheduleData>, PersistenceError> {
        queries::schedules::list_city_schedules(&mut self.conn, city, date)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_city_schedules_in_range(
        &mut self,
        city: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<ScheduleData>, PersistenceError> {
        queries::schedules::list_city_schedules_in_range(&mut self.conn, city, start_date, end_date)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_city_schedules_on(&mut self, city: &str, date: &str) -> Result<i64, PersistenceError> {
        queries::schedules::count_city_schedules_on(&mut self.conn, city, date)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_schedules(&mut self) -> Result<i64, PersistenceError> {
        queries::schedules::count_schedules(&mut self.conn)
    }

    // ========================================================================
    // User override schedule
    // ========================================================================

    /// Atomically replaces a user's override list.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the previous list remains.
    pub fn replace_user_schedules(
        &mut self,
        user_id: &str,
        entries: &[ScheduleEntry],
    ) -> Result<usize, PersistenceError> {
        mutations::schedules::replace_user_schedules(&mut self.conn, user_id, entries)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_user_schedules(
        &mut self,
        user_id: &str,
    ) -> Result<Vec<UserScheduleData>, PersistenceError> {
        queries::schedules::list_user_schedules(&mut self.conn, user_id)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_user_schedules_latest(
        &mut self,
        user_id: &str,
    ) -> Result<Vec<UserScheduleData>, PersistenceError> {
        queries::schedules::list_user_schedules_latest(&mut self.conn, user_id)
    }

    // ========================================================================
    // User locations
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if the user does not exist or the write fails.
    pub fn upsert_user_location(
        &mut self,
        user_id: &str,
        province: &str,
        city: &str,
    ) -> Result<(), PersistenceError> {
        mutations::locations::upsert_user_location(&mut self.conn, user_id, province, city)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user_location(
        &mut self,
        user_id: &str,
    ) -> Result<Option<UserLocationData>, PersistenceError> {
        queries::locations::get_user_location(&mut self.conn, user_id)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_user_locations(&mut self) -> Result<Vec<UserLocationData>, PersistenceError> {
        queries::locations::list_user_locations(&mut self.conn)
    }

    // ========================================================================
    // Contents
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_content(&mut self, fields: &ContentFields) -> Result<i64, PersistenceError> {
        mutations::contents::create_content(&mut self.conn, fields)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_content(&mut self, content_id: i64) -> Result<Option<ContentData>, PersistenceError> {
        queries::contents::get_content(&mut self.conn, content_id)
    }

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_active_contents(&mut self) -> Result<Vec<ContentData>, PersistenceError> {
        queries::contents::list_active_contents(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the item does not exist.
    pub fn update_content(
        &mut self,
        content_id: i64,
        fields: &ContentFields,
    ) -> Result<(), PersistenceError> {
        mutations::contents::update_content(&mut self.conn, content_id, fields)
    }

    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the item does not exist.
    pub fn delete_content(&mut self, content_id: i64) -> Result<(), PersistenceError> {
        mutations::contents::delete_content(&mut self.conn, content_id)
    }
}
