// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The prayer name is not one of the five canonical names.
    InvalidPrayerName(String),
    /// A date string is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate {
        /// The rejected input.
        value: String,
        /// Why the input was rejected.
        reason: String,
    },
    /// A time string is not a valid `HH:MM:SS` or `HH:MM` wall-clock time.
    InvalidTime {
        /// The rejected input.
        value: String,
        /// Why the input was rejected.
        reason: String,
    },
    /// A required bound of a date range was not supplied.
    MissingDateRangeBound {
        /// The missing field name as seen by clients.
        field: &'static str,
    },
    /// The start of a date range is after its end.
    InvalidDateRange {
        /// The requested start date.
        start: String,
        /// The requested end date.
        end: String,
    },
    /// The (province, city) pair is not in the location table.
    UnknownLocation {
        /// The requested province.
        province: String,
        /// The requested city.
        city: String,
    },
    /// The calculation method identifier is not recognized.
    InvalidCalculationMethod(String),
    /// The Asr madhab identifier is not recognized.
    InvalidMadhab(String),
    /// Prayer times are not calculated this far from the equator.
    UnsupportedLatitude(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPrayerName(name) => write!(
                f,
                "Invalid prayer name '{name}'. Expected one of Fajr, Dhuhr, Asr, Maghrib, Isha"
            ),
            Self::InvalidDate { value, reason } => {
                write!(f, "Invalid date '{value}': {reason}")
            }
            Self::InvalidTime { value, reason } => {
                write!(f, "Invalid time '{value}': {reason}")
            }
            Self::MissingDateRangeBound { .. } => {
                write!(f, "Start date and end date are required")
            }
            Self::InvalidDateRange { start, end } => {
                write!(f, "Start date {start} is after end date {end}")
            }
            Self::UnknownLocation { .. } => write!(f, "Invalid city or province"),
            Self::InvalidCalculationMethod(method) => {
                write!(f, "Unknown calculation method '{method}'")
            }
            Self::InvalidMadhab(madhab) => write!(f, "Unknown Asr madhab '{madhab}'"),
            Self::UnsupportedLatitude(latitude) => {
                write!(f, "Latitude {latitude} is outside the supported range")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
