// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Yearly reference schedule generation.
//!
//! Generation walks the location table one city at a time. Each city's
//! whole year is calculated in memory and handed to a sink, which persists
//! it as one unit. Cancellation is checked before every city, so a
//! cancelled run leaves only whole cities behind.

use crate::error::CoreError;
use jadwal_domain::{
    CalculationParameters, DateRange, Location, PrayerTimes, ScheduleEntry,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// One city's calculated schedule for a range of days.
#[derive(Debug, Clone, PartialEq)]
pub struct CitySchedule {
    pub location: Location,
    /// Entries ordered by date, then by prayer.
    pub entries: Vec<ScheduleEntry>,
}

/// Outcome of a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub year: i32,
    pub cities: usize,
    pub rows_written: usize,
}

/// Calculates every prayer of every day in `range` for one city.
///
/// # Errors
///
/// Returns `CoreError::Calculation` if any day's times cannot be computed.
pub fn generate_city_schedule(
    location: &Location,
    range: &DateRange,
    parameters: &CalculationParameters,
) -> Result<CitySchedule, CoreError> {
    let mut entries = Vec::new();
    for date in range.days() {
        let times = PrayerTimes::for_location(location, date, parameters).map_err(|source| {
            CoreError::Calculation {
                city: location.city_name().to_string(),
                source,
            }
        })?;
        entries.extend(
            times
                .entries()
                .into_iter()
                .map(|(prayer_name, time)| ScheduleEntry {
                    prayer_name,
                    time,
                    date,
                }),
        );
    }

    Ok(CitySchedule {
        location: *location,
        entries,
    })
}

/// Generates and stores a full calendar year for every given location.
///
/// # Arguments
///
/// * `year` - The calendar year to generate (Jan 1 through Dec 31)
/// * `parameters` - Calculation method and Asr madhab
/// * `locations` - Cities to generate, in order
/// * `cancellation` - Checked before each city
/// * `sink` - Persists one city's batch and returns the rows written
///
/// # Errors
///
/// Returns an error if:
/// - The token is cancelled before all cities are done
/// - The calculator fails for a city
/// - The sink fails; earlier cities stay committed
pub fn generate_yearly_schedule<I, F, E>(
    year: i32,
    parameters: &CalculationParameters,
    locations: I,
    cancellation: &CancellationToken,
    mut sink: F,
) -> Result<GenerationSummary, CoreError>
where
    I: IntoIterator<Item = Location>,
    F: FnMut(CitySchedule) -> Result<usize, E>,
    E: std::fmt::Display,
{
    let range = DateRange::calendar_year(year)?;
    info!(year, method = %parameters.method, "Starting yearly schedule generation");

    let mut cities_completed = 0;
    let mut rows_written = 0;

    for location in locations {
        if cancellation.is_cancelled() {
            warn!(
                year,
                cities_completed, rows_written, "Yearly schedule generation cancelled"
            );
            return Err(CoreError::Cancelled {
                year,
                cities_completed,
                rows_written,
            });
        }

        let schedule = generate_city_schedule(&location, &range, parameters)?;
        let rows = sink(schedule).map_err(|e| CoreError::Storage {
            city: location.city_name().to_string(),
            cities_completed,
            message: e.to_string(),
        })?;

        cities_completed += 1;
        rows_written += rows;
        debug!(city = location.city_name(), rows, "City schedule stored");
    }

    info!(
        year,
        cities = cities_completed,
        rows_written,
        "Yearly schedule generation complete"
    );

    Ok(GenerationSummary {
        year,
        cities: cities_completed,
        rows_written,
    })
}
