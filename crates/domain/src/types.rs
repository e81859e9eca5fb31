// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the five daily prayers.
///
/// The string forms are exact and case-sensitive; they are what the
/// storage layer persists and what clients send and receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// All prayers in the order they occur during a day.
    pub const ALL: [Self; 5] = [
        Self::Fajr,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }
}

impl FromStr for PrayerName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| DomainError::InvalidPrayerName(s.to_string()))
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A civil calendar date, rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleDate(NaiveDate);

impl ScheduleDate {
    const FORMAT: &'static str = "%Y-%m-%d";

    /// Wraps an existing calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses a strict `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the string is not exactly ten
    /// characters in the expected layout or names a day that does not exist.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let well_formed = value.len() == 10
            && value.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(DomainError::InvalidDate {
                value: value.to_string(),
                reason: String::from("expected YYYY-MM-DD"),
            });
        }

        NaiveDate::parse_from_str(value, Self::FORMAT)
            .map(Self)
            .map_err(|e| DomainError::InvalidDate {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns the first day of the given year.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside chrono's supported range.
    pub fn first_of_year(year: i32) -> Result<Self, DomainError> {
        NaiveDate::from_ymd_opt(year, 1, 1)
            .map(Self)
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("building January 1 of {year}"),
            })
    }

    /// Returns the last day of the given year.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside chrono's supported range.
    pub fn last_of_year(year: i32) -> Result<Self, DomainError> {
        NaiveDate::from_ymd_opt(year, 12, 31)
            .map(Self)
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("building December 31 of {year}"),
            })
    }

    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the following day, or `None` at the end of chrono's range.
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        self.0.checked_add_signed(Duration::days(1)).map(Self)
    }
}

impl FromStr for ScheduleDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ScheduleDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

/// A local wall-clock time with second precision, rendered as `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrayerTime(NaiveTime);

impl PrayerTime {
    /// Wraps a wall-clock time, dropping any sub-second component.
    #[must_use]
    pub fn new(time: NaiveTime) -> Self {
        Self(time.with_nanosecond(0).unwrap_or(time))
    }

    /// Parses `HH:MM:SS`, or `HH:MM` which is normalized to `HH:MM:00`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTime` for any other layout or an
    /// out-of-range component.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let format = match value.len() {
            8 => "%H:%M:%S",
            5 => "%H:%M",
            _ => {
                return Err(DomainError::InvalidTime {
                    value: value.to_string(),
                    reason: String::from("expected HH:MM:SS or HH:MM"),
                });
            }
        };

        NaiveTime::parse_from_str(value, format)
            .map(Self)
            .map_err(|e| DomainError::InvalidTime {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    #[must_use]
    pub const fn time(self) -> NaiveTime {
        self.0
    }
}

impl FromStr for PrayerTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for PrayerTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

/// Geographic position in decimal degrees (north and east positive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A single validated (prayer, time, date) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub prayer_name: PrayerName,
    pub time: PrayerTime,
    pub date: ScheduleDate,
}

/// An inclusive range of calendar dates with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: ScheduleDate,
    end: ScheduleDate,
}

impl DateRange {
    /// Creates a range, rejecting one whose start is after its end.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `start > end`.
    pub fn new(start: ScheduleDate, end: ScheduleDate) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidDateRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Every day of the given calendar year.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside chrono's supported range.
    pub fn calendar_year(year: i32) -> Result<Self, DomainError> {
        Self::new(
            ScheduleDate::first_of_year(year)?,
            ScheduleDate::last_of_year(year)?,
        )
    }

    #[must_use]
    pub const fn start(&self) -> ScheduleDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> ScheduleDate {
        self.end
    }

    /// Iterates each date from start to end inclusive.
    pub fn days(&self) -> impl Iterator<Item = ScheduleDate> + use<> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |day| {
            day.succ().filter(|next| *next <= end)
        })
    }
}
