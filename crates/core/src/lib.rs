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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod generator;
mod grouping;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use generator::{
    CitySchedule, GenerationSummary, generate_city_schedule, generate_yearly_schedule,
};
pub use grouping::{GroupedSchedule, Scheduled, group_by_date};
pub use tokio_util::sync::CancellationToken;
