// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the display backend.
//!
//! This crate sits between the HTTP server and the lower layers. It owns
//! authentication and authorization, the request/response DTOs, and one
//! handler function per operation. Handlers are transport-agnostic: they
//! take the persistence layer and already-parsed inputs and return either
//! a response DTO or an [`ApiError`].

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

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{
    AuthenticatedUser, AuthenticationService, AuthorizationService, DEFAULT_ADMIN_ID, Role,
};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    city_schedules, create_content, create_user, delete_content, delete_user,
    generate_yearly_schedule, get_content, get_running_text, get_saved_user_location,
    get_user_location, latest_user_schedules, list_contents, list_locations, list_schedules,
    list_user_locations, list_users, login, logout, range_schedules, set_running_text,
    set_user_location, sync_user_schedules, today_schedules, update_content, update_user,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    CityInfo, CityScheduleInfo, ContentInfo, ContentRequest, CreateUserRequest,
    GenerateScheduleResponse, GroupedScheduleResponse, LocationInfo, LoginRequest, LoginResponse,
    ProvinceInfo, RunningTextResponse, ScheduleEntryRequest, ScheduleInfo, SetLocationRequest,
    SetRunningTextRequest, SyncRequest, SyncResponse, UpdateUserRequest, UserInfo,
    UserLocationInfo,
};
