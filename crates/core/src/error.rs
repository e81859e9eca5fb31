// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use jadwal_domain::DomainError;

/// Errors that can occur while generating schedules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// The calculator could not produce times for a city.
    #[error("Prayer times for {city} could not be calculated: {source}")]
    Calculation {
        /// The city being generated.
        city: String,
        /// The underlying calculator failure.
        #[source]
        source: DomainError,
    },
    /// The job was cancelled between cities.
    #[error("Generation for {year} cancelled after {cities_completed} cities")]
    Cancelled {
        /// The year being generated.
        year: i32,
        /// Cities whose schedules were fully committed.
        cities_completed: usize,
        /// Rows committed before cancellation.
        rows_written: usize,
    },
    /// The sink failed to persist a city's batch.
    #[error("Storing schedules for {city} failed after {cities_completed} cities: {message}")]
    Storage {
        /// The city whose batch failed.
        city: String,
        /// Cities whose schedules were fully committed.
        cities_completed: usize,
        /// The sink's error message.
        message: String,
    },
}
