// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule mutations.
//!
//! ## Reference schedule
//!
//! Rows are keyed by `(city, schedule_date, prayer_name)`. Generation
//! upserts one city at a time inside a transaction, so readers always see
//! either a city's previous rows or its complete new year.
//!
//! ## Override schedule
//!
//! A user's list is replaced wholesale: delete then insert in one
//! transaction.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::upsert::excluded;
use jadwal::CitySchedule;
use jadwal_domain::ScheduleEntry;
use tracing::{debug, info};

use crate::diesel_schema::{prayer_schedules, user_prayer_schedules};
use crate::error::PersistenceError;

/// Rows per multi-row `INSERT` of override entries.
const BATCH_SIZE: usize = 250;

#[derive(Insertable)]
#[diesel(table_name = prayer_schedules)]
struct NewScheduleRow<'a> {
    province: &'a str,
    city: &'a str,
    prayer_name: &'a str,
    prayer_time: String,
    schedule_date: String,
}

#[derive(Insertable)]
#[diesel(table_name = user_prayer_schedules)]
struct NewUserScheduleRow<'a> {
    user_id: &'a str,
    prayer_name: &'a str,
    prayer_time: String,
    schedule_date: String,
}

/// Upserts one city's generated schedule in a single transaction.
///
/// diesel has no multi-row `ON CONFLICT` for `SQLite`, so each row is its
/// own statement within the transaction.
///
/// # Errors
///
/// Returns an error if any row fails; the city's earlier rows are then
/// left untouched.
pub fn upsert_city_schedule(
    conn: &mut SqliteConnection,
    schedule: &CitySchedule,
) -> Result<usize, PersistenceError> {
    let province = schedule.location.province_name();
    let city = schedule.location.city_name();

    let records: Vec<NewScheduleRow<'_>> = schedule
        .entries
        .iter()
        .map(|entry| NewScheduleRow {
            province,
            city,
            prayer_name: entry.prayer_name.as_str(),
            prayer_time: entry.time.to_string(),
            schedule_date: entry.date.to_string(),
        })
        .collect();

    let written = conn.transaction(|conn| {
        let mut written = 0;
        for row in &records {
            written += diesel::insert_into(prayer_schedules::table)
                .values(row)
                .on_conflict((
                    prayer_schedules::city,
                    prayer_schedules::schedule_date,
                    prayer_schedules::prayer_name,
                ))
                .do_update()
                .set((
                    prayer_schedules::province.eq(excluded(prayer_schedules::province)),
                    prayer_schedules::prayer_time.eq(excluded(prayer_schedules::prayer_time)),
                ))
                .execute(conn)?;
        }
        Ok::<_, PersistenceError>(written)
    })?;

    debug!(city, count = written, "Upserted reference schedule");
    Ok(written)
}

/// Replaces a user's override schedule with `entries`.
///
/// # Errors
///
/// Returns an error if the delete or any insert fails; the previous list
/// is then kept.
pub fn replace_user_schedules(
    conn: &mut SqliteConnection,
    user_id: &str,
    entries: &[ScheduleEntry],
) -> Result<usize, PersistenceError> {
    let records: Vec<NewUserScheduleRow<'_>> = entries
        .iter()
        .map(|entry| NewUserScheduleRow {
            user_id,
            prayer_name: entry.prayer_name.as_str(),
            prayer_time: entry.time.to_string(),
            schedule_date: entry.date.to_string(),
        })
        .collect();

    let (removed, inserted) = conn.transaction(|conn| {
        let removed: usize = diesel::delete(user_prayer_schedules::table)
            .filter(user_prayer_schedules::user_id.eq(user_id))
            .execute(conn)?;

        let mut inserted = 0;
        for batch in records.chunks(BATCH_SIZE) {
            inserted += diesel::insert_into(user_prayer_schedules::table)
                .values(batch)
                .execute(conn)?;
        }
        Ok::<_, PersistenceError>((removed, inserted))
    })?;

    info!(user_id, removed, inserted, "Replaced user schedule");
    Ok(inserted)
}
