// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod locations;
mod prayer_times;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use locations::{
    City, DEFAULT_CITY, DEFAULT_PROVINCE, Location, Province, all_locations, default_location,
    find_city, find_location, is_valid_location, provinces,
};
pub use prayer_times::{
    CalculationMethod, CalculationParameters, MAX_LATITUDE, Madhab, PrayerTimes,
};
pub use types::{
    Coordinates, DateRange, PrayerName, PrayerTime, ScheduleDate, ScheduleEntry,
};
pub use validation::{validate_date_range, validate_location, validate_schedule_entry};
