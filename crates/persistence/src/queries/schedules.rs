// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference and per-user schedule queries.
//!
//! Every multi-row result is ordered by date ascending and then by time
//! ascending, except the per-user "latest" listing which puts the most
//! recent date first.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{ScheduleData, UserScheduleData};
use crate::diesel_schema::{prayer_schedules, user_prayer_schedules};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = prayer_schedules)]
struct ScheduleRow {
    schedule_id: i64,
    province: String,
    city: String,
    prayer_name: String,
    prayer_time: String,
    schedule_date: String,
}

impl From<ScheduleRow> for ScheduleData {
    fn from(row: ScheduleRow) -> Self {
        Self {
            schedule_id: row.schedule_id,
            province: row.province,
            city: row.city,
            prayer_name: row.prayer_name,
            prayer_time: row.prayer_time,
            schedule_date: row.schedule_date,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = user_prayer_schedules)]
struct UserScheduleRow {
    user_schedule_id: i64,
    user_id: String,
    prayer_name: String,
    prayer_time: String,
    schedule_date: String,
    created_at: String,
}

impl From<UserScheduleRow> for UserScheduleData {
    fn from(row: UserScheduleRow) -> Self {
        Self {
            user_schedule_id: row.user_schedule_id,
            user_id: row.user_id,
            prayer_name: row.prayer_name,
            prayer_time: row.prayer_time,
            schedule_date: row.schedule_date,
            created_at: row.created_at,
        }
    }
}

/// Lists a city's reference schedule, optionally for a single date.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `city` - The city name, matched exactly
/// * `date` - `YYYY-MM-DD` filter, or `None` for every stored date
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_city_schedules(
    conn: &mut SqliteConnection,
    city: &str,
    date: Option<&str>,
) -> Result<Vec<ScheduleData>, PersistenceError> {
    debug!(city, date, "Listing reference schedules");

    let mut query = prayer_schedules::table
        .filter(prayer_schedules::city.eq(city))
        .into_boxed();
    if let Some(date) = date {
        query = query.filter(prayer_schedules::schedule_date.eq(date));
    }

    let rows: Vec<ScheduleRow> = query
        .order((
            prayer_schedules::schedule_date.asc(),
            prayer_schedules::prayer_time.asc(),
        ))
        .select(ScheduleRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(ScheduleData::from).collect())
}

/// Lists a city's reference schedule for an inclusive date range.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_city_schedules_in_range(
    conn: &mut SqliteConnection,
    city: &str,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<ScheduleData>, PersistenceError> {
    debug!(city, start_date, end_date, "Listing reference schedules in range");

    let rows: Vec<ScheduleRow> = prayer_schedules::table
        .filter(prayer_schedules::city.eq(city))
        .filter(prayer_schedules::schedule_date.between(start_date, end_date))
        .order((
            prayer_schedules::schedule_date.asc(),
            prayer_schedules::prayer_time.asc(),
        ))
        .select(ScheduleRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(ScheduleData::from).collect())
}

/// Counts reference rows stored for a city on a date.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_city_schedules_on(
    conn: &mut SqliteConnection,
    city: &str,
    date: &str,
) -> Result<i64, PersistenceError> {
    Ok(prayer_schedules::table
        .filter(prayer_schedules::city.eq(city))
        .filter(prayer_schedules::schedule_date.eq(date))
        .count()
        .get_result(conn)?)
}

/// Counts every reference row.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_schedules(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(prayer_schedules::table.count().get_result(conn)?)
}

/// Lists a user's override schedule, most recent date first and times
/// ascending within a date.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_user_schedules_latest(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Vec<UserScheduleData>, PersistenceError> {
    let rows: Vec<UserScheduleRow> = user_prayer_schedules::table
        .filter(user_prayer_schedules::user_id.eq(user_id))
        .order((
            user_prayer_schedules::schedule_date.desc(),
            user_prayer_schedules::prayer_time.asc(),
        ))
        .select(UserScheduleRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(UserScheduleData::from).collect())
}

/// Lists a user's override schedule in insertion order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_user_schedules(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Vec<UserScheduleData>, PersistenceError> {
    let rows: Vec<UserScheduleRow> = user_prayer_schedules::table
        .filter(user_prayer_schedules::user_id.eq(user_id))
        .order(user_prayer_schedules::user_schedule_id.asc())
        .select(UserScheduleRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(UserScheduleData::from).collect())
}
