// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::locations::{Location, find_location};
use crate::types::{DateRange, PrayerName, PrayerTime, ScheduleDate, ScheduleEntry};

/// Validates that a (province, city) pair exists in the location table.
///
/// # Arguments
///
/// * `province` - The province name, matched exactly
/// * `city` - The city name, matched exactly within that province
///
/// # Errors
///
/// Returns `DomainError::UnknownLocation` if either name is unknown or the
/// city belongs to a different province.
pub fn validate_location(province: &str, city: &str) -> Result<Location, DomainError> {
    find_location(province, city).ok_or_else(|| DomainError::UnknownLocation {
        province: province.to_string(),
        city: city.to_string(),
    })
}

/// Validates query-string bounds of a date range.
///
/// Both bounds are required. Each must be a `YYYY-MM-DD` date and the start
/// must not be after the end.
///
/// # Errors
///
/// Returns an error if:
/// - Either bound is missing or empty
/// - Either bound fails to parse
/// - The start is after the end
pub fn validate_date_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<DateRange, DomainError> {
    let start = start
        .filter(|s| !s.is_empty())
        .ok_or(DomainError::MissingDateRangeBound { field: "startDate" })?;
    let end = end
        .filter(|s| !s.is_empty())
        .ok_or(DomainError::MissingDateRangeBound { field: "endDate" })?;

    DateRange::new(ScheduleDate::parse(start)?, ScheduleDate::parse(end)?)
}

/// Validates one client-submitted schedule entry.
///
/// # Errors
///
/// Returns an error if the prayer name is not canonical, the time is not
/// `HH:MM:SS`/`HH:MM`, or the date is not `YYYY-MM-DD`.
pub fn validate_schedule_entry(
    prayer_name: &str,
    time: &str,
    date: &str,
) -> Result<ScheduleEntry, DomainError> {
    Ok(ScheduleEntry {
        prayer_name: prayer_name.parse::<PrayerName>()?,
        time: PrayerTime::parse(time)?,
        date: ScheduleDate::parse(date)?,
    })
}
