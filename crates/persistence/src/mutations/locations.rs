// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::upsert::excluded;
use tracing::info;

use crate::diesel_schema::user_locations;
use crate::error::PersistenceError;

/// Inserts or replaces a user's saved location.
///
/// Callers validate the pair against the location table first.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if the user does not
/// exist, or another error if the write fails.
pub fn upsert_user_location(
    conn: &mut SqliteConnection,
    user_id: &str,
    province: &str,
    city: &str,
) -> Result<(), PersistenceError> {
    info!(user_id, province, city, "Saving user location");

    diesel::insert_into(user_locations::table)
        .values((
            user_locations::user_id.eq(user_id),
            user_locations::province.eq(province),
            user_locations::city.eq(city),
        ))
        .on_conflict(user_locations::user_id)
        .do_update()
        .set((
            user_locations::province.eq(excluded(user_locations::province)),
            user_locations::city.eq(excluded(user_locations::city)),
            user_locations::updated_at
                .eq(diesel::dsl::sql::<diesel::sql_types::Text>("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)?;

    Ok(())
}
