// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::UserLocationData;
use crate::diesel_schema::user_locations;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = user_locations)]
struct UserLocationRow {
    user_id: String,
    province: String,
    city: String,
    updated_at: String,
}

impl From<UserLocationRow> for UserLocationData {
    fn from(row: UserLocationRow) -> Self {
        Self {
            user_id: row.user_id,
            province: row.province,
            city: row.city,
            updated_at: row.updated_at,
        }
    }
}

/// Retrieves a user's saved location.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user has never saved one.
pub fn get_user_location(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Option<UserLocationData>, PersistenceError> {
    Ok(user_locations::table
        .filter(user_locations::user_id.eq(user_id))
        .select(UserLocationRow::as_select())
        .first(conn)
        .optional()?
        .map(UserLocationData::from))
}

/// Lists every saved location ordered by user ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_user_locations(
    conn: &mut SqliteConnection,
) -> Result<Vec<UserLocationData>, PersistenceError> {
    let rows: Vec<UserLocationRow> = user_locations::table
        .order(user_locations::user_id.asc())
        .select(UserLocationRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(UserLocationData::from).collect())
}
