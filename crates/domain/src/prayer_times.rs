// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Daily prayer time calculation.
//!
//! The astronomy is delegated to [`salah`]; this module maps the backend's
//! method and madhab names onto it and converts the UTC results into the
//! province's time zone.
//!
//! ## Invariants
//!
//! - Output is in the province's time zone, rounded to the nearest minute
//! - Fajr < Sunrise < Dhuhr < Asr < Maghrib < Isha for every Indonesian city
//! - Coordinates beyond [`MAX_LATITUDE`] are rejected before calculation

use crate::error::DomainError;
use crate::locations::Location;
use crate::types::{Coordinates, PrayerName, PrayerTime, ScheduleDate};
use chrono::DateTime;
use chrono_tz::Tz;
use salah::{Configuration, Parameters, Prayer};
use std::str::FromStr;

/// Highest absolute latitude at which every supported twilight angle is
/// reached on every day of the year.
pub const MAX_LATITUDE: f64 = 45.0;

/// A named set of twilight angles and adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculationMethod {
    /// Muslim World League: Fajr 18, Isha 17.
    #[default]
    MuslimWorldLeague,
    /// Egyptian General Authority of Survey: Fajr 19.5, Isha 17.5.
    Egyptian,
    /// University of Islamic Sciences, Karachi: Fajr 18, Isha 18.
    Karachi,
    /// Islamic Society of North America: Fajr 15, Isha 15.
    NorthAmerica,
    /// Majlis Ugama Islam Singapura, also used in Indonesia: Fajr 20, Isha 18.
    Singapore,
}

impl CalculationMethod {
    pub const ALL: [Self; 5] = [
        Self::MuslimWorldLeague,
        Self::Egyptian,
        Self::Karachi,
        Self::NorthAmerica,
        Self::Singapore,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MuslimWorldLeague => "muslim-world-league",
            Self::Egyptian => "egyptian",
            Self::Karachi => "karachi",
            Self::NorthAmerica => "north-america",
            Self::Singapore => "singapore",
        }
    }

    const fn method(self) -> salah::Method {
        match self {
            Self::MuslimWorldLeague => salah::Method::MuslimWorldLeague,
            Self::Egyptian => salah::Method::Egyptian,
            Self::Karachi => salah::Method::Karachi,
            Self::NorthAmerica => salah::Method::NorthAmerica,
            Self::Singapore => salah::Method::Singapore,
        }
    }
}

impl FromStr for CalculationMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| DomainError::InvalidCalculationMethod(s.to_string()))
    }
}

impl std::fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Juristic rule for the Asr shadow length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Madhab {
    /// Shadow equals object length plus noon shadow.
    #[default]
    Shafi,
    /// Shadow equals twice the object length plus noon shadow.
    Hanafi,
}

impl Madhab {
    pub const ALL: [Self; 2] = [Self::Shafi, Self::Hanafi];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shafi => "shafi",
            Self::Hanafi => "hanafi",
        }
    }

    const fn madhab(self) -> salah::Madhab {
        match self {
            Self::Shafi => salah::Madhab::Shafi,
            Self::Hanafi => salah::Madhab::Hanafi,
        }
    }
}

impl FromStr for Madhab {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|madhab| madhab.as_str() == s)
            .ok_or_else(|| DomainError::InvalidMadhab(s.to_string()))
    }
}

impl std::fmt::Display for Madhab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that determines prayer times apart from place and date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalculationParameters {
    pub method: CalculationMethod,
    pub madhab: Madhab,
}

impl CalculationParameters {
    #[must_use]
    pub const fn new(method: CalculationMethod, madhab: Madhab) -> Self {
        Self { method, madhab }
    }

    fn configuration(self) -> Parameters {
        Configuration::with(self.method.method(), self.madhab.madhab())
    }
}

/// Prayer times for one place and one day.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerTimes {
    pub date: ScheduleDate,
    pub fajr: DateTime<Tz>,
    pub sunrise: DateTime<Tz>,
    pub dhuhr: DateTime<Tz>,
    pub asr: DateTime<Tz>,
    pub maghrib: DateTime<Tz>,
    pub isha: DateTime<Tz>,
}

impl PrayerTimes {
    /// Calculates prayer times for a location from the table.
    ///
    /// # Errors
    ///
    /// See [`PrayerTimes::calculate`].
    pub fn for_location(
        location: &Location,
        date: ScheduleDate,
        parameters: &CalculationParameters,
    ) -> Result<Self, DomainError> {
        Self::calculate(
            location.coordinates(),
            date,
            location.timezone(),
            parameters,
        )
    }

    /// Calculates prayer times for arbitrary coordinates.
    ///
    /// # Arguments
    ///
    /// * `coordinates` - Latitude and longitude in decimal degrees
    /// * `date` - The local calendar date
    /// * `timezone` - The zone the resulting times are expressed in
    /// * `parameters` - Calculation method and madhab
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnsupportedLatitude` if the latitude is beyond
    /// [`MAX_LATITUDE`] or not a number.
    pub fn calculate(
        coordinates: Coordinates,
        date: ScheduleDate,
        timezone: Tz,
        parameters: &CalculationParameters,
    ) -> Result<Self, DomainError> {
        // salah panics when a twilight angle is never reached.
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&coordinates.latitude) {
            return Err(DomainError::UnsupportedLatitude(
                coordinates.latitude.to_string(),
            ));
        }

        let times = salah::PrayerTimes::new(
            date.date(),
            salah::Coordinates::new(coordinates.latitude, coordinates.longitude),
            parameters.configuration(),
        );
        let local = |prayer| times.time(prayer).with_timezone(&timezone);

        Ok(Self {
            date,
            fajr: local(Prayer::Fajr),
            sunrise: local(Prayer::Sunrise),
            dhuhr: local(Prayer::Dhuhr),
            asr: local(Prayer::Asr),
            maghrib: local(Prayer::Maghrib),
            isha: local(Prayer::Isha),
        })
    }

    #[must_use]
    pub const fn time_for(&self, prayer: PrayerName) -> &DateTime<Tz> {
        match prayer {
            PrayerName::Fajr => &self.fajr,
            PrayerName::Dhuhr => &self.dhuhr,
            PrayerName::Asr => &self.asr,
            PrayerName::Maghrib => &self.maghrib,
            PrayerName::Isha => &self.isha,
        }
    }

    /// Local wall-clock time of a prayer.
    #[must_use]
    pub fn local_time(&self, prayer: PrayerName) -> PrayerTime {
        PrayerTime::new(self.time_for(prayer).time())
    }

    /// The five prayers in daily order with their local times.
    #[must_use]
    pub fn entries(&self) -> [(PrayerName, PrayerTime); 5] {
        PrayerName::ALL.map(|prayer| (prayer, self.local_time(prayer)))
    }
}
