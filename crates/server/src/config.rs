// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line and environment configuration.

use chrono::{Datelike, Utc};
use chrono_tz::Tz;
use clap::Parser;
use jadwal_domain::{CalculationMethod, CalculationParameters, Madhab, ScheduleDate};

/// Jadwal Server - HTTP backend for prayer schedule TV displays
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "JADWAL_DATABASE")]
    pub database: Option<String>,

    /// Address to bind the server to
    #[arg(long, env = "JADWAL_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to bind the server to
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Time zone used for "today" and for the generation year
    #[arg(long, env = "JADWAL_TIMEZONE", default_value = "Asia/Jakarta")]
    pub timezone: String,

    /// Lifetime of a login session, in hours
    #[arg(long, env = "JADWAL_SESSION_TTL_HOURS", default_value_t = 24)]
    pub session_ttl_hours: u32,

    /// Username of the bootstrap admin account
    #[arg(long, env = "JADWAL_ADMIN_USERNAME", default_value = "admin")]
    pub admin_username: String,

    /// Password of the bootstrap admin account, used only when it is created
    #[arg(long, env = "JADWAL_ADMIN_PASSWORD", default_value = "admin123")]
    pub admin_password: String,

    /// Prayer-time convention used for yearly generation
    #[arg(long, env = "JADWAL_CALCULATION_METHOD", default_value = "muslim-world-league")]
    pub calculation_method: String,

    /// Asr shadow rule used for yearly generation (`shafi` or `hanafi`)
    #[arg(long, env = "JADWAL_ASR_MADHAB", default_value = "shafi")]
    pub asr_madhab: String,

    /// Seconds before a running yearly generation is cancelled
    #[arg(long, env = "JADWAL_GENERATION_TIMEOUT_SECS", default_value_t = 900)]
    pub generation_timeout_secs: u64,
}

/// Validated settings shared with request handlers.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub timezone: Tz,
    pub session_ttl: time::Duration,
    pub calculation: CalculationParameters,
    pub generation_timeout: std::time::Duration,
}

impl ServerConfig {
    /// Validates the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns a message if the time zone, calculation method or madhab is
    /// unknown.
    pub fn from_args(args: &Args) -> Result<Self, String> {
        let timezone: Tz = args
            .timezone
            .parse()
            .map_err(|e| format!("Invalid time zone '{}': {e}", args.timezone))?;
        let method: CalculationMethod = args
            .calculation_method
            .parse()
            .map_err(|e| format!("{e}"))?;
        let madhab: Madhab = args.asr_madhab.parse().map_err(|e| format!("{e}"))?;

        Ok(Self {
            timezone,
            session_ttl: time::Duration::hours(i64::from(args.session_ttl_hours)),
            calculation: CalculationParameters::new(method, madhab),
            generation_timeout: std::time::Duration::from_secs(args.generation_timeout_secs),
        })
    }

    /// Today's date in the configured zone.
    pub fn today(&self) -> ScheduleDate {
        ScheduleDate::new(Utc::now().with_timezone(&self.timezone).date_naive())
    }

    /// The calendar year in the configured zone.
    pub fn current_year(&self) -> i32 {
        Utc::now().with_timezone(&self.timezone).year()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Asia::Jakarta,
            session_ttl: time::Duration::hours(24),
            calculation: CalculationParameters::default(),
            generation_timeout: std::time::Duration::from_secs(900),
        }
    }
}
