// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Runs the yearly generation job off the async runtime.
//!
//! At most one job runs per process. The job gets a child of the server's
//! shutdown token, so it stops at the next city boundary on shutdown or when
//! the configured deadline passes. The storage lock is taken per city, which
//! lets queries interleave with a running job.

use std::sync::Arc;

use jadwal::CancellationToken;
use jadwal_api::{ApiError, GenerateScheduleResponse};
use tracing::{info, warn};

use crate::AppState;
use crate::http::HttpError;

/// Generates and stores the reference schedule of `year` for every city.
///
/// # Errors
///
/// - 409 if another generation is already running
/// - 500 if the job is cancelled, a city fails, or the worker panics
pub async fn run_yearly_generation(
    state: &AppState,
    year: i32,
) -> Result<GenerateScheduleResponse, HttpError> {
    let guard = Arc::clone(&state.generation)
        .try_lock_owned()
        .map_err(|_| ApiError::Conflict {
            message: String::from("Schedule generation is already running"),
        })?;

    let token: CancellationToken = state.shutdown.child_token();
    let watchdog = tokio::spawn(deadline(token.clone(), state.config.generation_timeout));

    info!(year, "Starting yearly schedule generation");

    let persistence = Arc::clone(&state.persistence);
    let parameters = state.config.calculation;
    let job_token = token.clone();
    let joined = tokio::task::spawn_blocking(move || {
        let _running = guard;
        jadwal_api::generate_yearly_schedule(year, &parameters, &job_token, |schedule| {
            persistence.blocking_lock().upsert_city_schedule(schedule)
        })
    })
    .await;

    // Stops the watchdog.
    token.cancel();
    if let Err(e) = watchdog.await {
        warn!(error = %e, "Generation watchdog did not finish cleanly");
    }

    let summary = joined
        .map_err(|e| HttpError::internal(format!("Generation worker failed: {e}")))??;

    info!(
        year = summary.year,
        cities = summary.cities,
        rows = summary.rows_written,
        "Yearly schedule generation finished"
    );
    Ok(summary)
}

/// Cancels `token` once `timeout` elapses, unless it is cancelled first.
async fn deadline(token: CancellationToken, timeout: std::time::Duration) {
    tokio::select! {
        () = tokio::time::sleep(timeout) => {
            warn!(timeout_secs = timeout.as_secs(), "Generation deadline reached, cancelling");
            token.cancel();
        }
        () = token.cancelled() => {}
    }
}
