// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use jadwal::generate_city_schedule;
use jadwal_domain::{CalculationParameters, DateRange, ScheduleDate, find_city};
use jadwal_persistence::SqlitePersistence;

use crate::{AuthenticatedUser, AuthenticationService, DEFAULT_ADMIN_ID, Role};

pub const ADMIN_PASSWORD: &str = "admin123";
pub const DISPLAY_PASSWORD: &str = "display-pass1";

/// A fresh database containing the bootstrap admin.
pub fn setup() -> SqlitePersistence {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    AuthenticationService::ensure_default_admin(&mut persistence, "admin", ADMIN_PASSWORD)
        .unwrap();
    persistence
}

pub fn admin() -> AuthenticatedUser {
    AuthenticatedUser::new(
        String::from(DEFAULT_ADMIN_ID),
        String::from("admin"),
        Role::Admin,
    )
}

/// Stores a display account directly and returns it as an authenticated user.
pub fn create_display_user(persistence: &mut SqlitePersistence, username: &str) -> AuthenticatedUser {
    let user_id = format!("user-{username}");
    persistence
        .create_user(&user_id, username, DISPLAY_PASSWORD, "user")
        .unwrap();
    AuthenticatedUser::new(user_id, String::from(username), Role::User)
}

/// Stores the reference schedule of `city` for the inclusive date range.
pub fn store_city_days(persistence: &mut SqlitePersistence, city: &str, start: &str, end: &str) {
    let range = DateRange::new(
        ScheduleDate::parse(start).unwrap(),
        ScheduleDate::parse(end).unwrap(),
    )
    .unwrap();
    let schedule = generate_city_schedule(
        &find_city(city).unwrap(),
        &range,
        &CalculationParameters::default(),
    )
    .unwrap();
    persistence.upsert_city_schedule(&schedule).unwrap();
}
