// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are camelCase on the wire.

use std::collections::BTreeMap;

use jadwal::Scheduled;
use serde::{Deserialize, Serialize};

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The bearer token to send as `Authorization: Bearer <token>`.
    pub token: String,
    /// ISO 8601 expiry of the token.
    pub expires_at: String,
    pub user: UserInfo,
}

/// Public view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub role: String,
    pub is_active: bool,
}

/// API request to create an account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// `admin` or `user`; defaults to `user`.
    pub role: Option<String>,
}

/// API request to activate or deactivate an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub is_active: Option<bool>,
}

/// API request to set a display's running text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRunningTextRequest {
    pub running_text: Option<String>,
    pub user_id: Option<String>,
}

/// A display's running text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningTextResponse {
    pub running_text: String,
    pub user_id: String,
}

/// API request to create or fully replace a content item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub content_type: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Only honored on update; new content is always active.
    pub is_active: Option<bool>,
}

/// Public view of a content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInfo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub content_type: String,
    pub image_urls: Vec<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// One client-submitted schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntryRequest {
    #[serde(default)]
    pub prayer_name: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub date: String,
}

/// API request replacing the caller's override schedule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    pub prayer_schedules: Option<Vec<ScheduleEntryRequest>>,
}

/// API response after replacing the override schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    pub data: Vec<ScheduleInfo>,
    /// ISO 8601 time of the sync.
    pub last_sync: String,
}

/// One prayer on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInfo {
    pub id: i64,
    pub prayer_name: String,
    pub time: String,
    pub date: String,
}

impl Scheduled for ScheduleInfo {
    fn schedule_date(&self) -> &str {
        &self.date
    }

    fn schedule_time(&self) -> &str {
        &self.time
    }
}

/// Schedule rows grouped by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedScheduleResponse {
    /// Dates ascending, each day ordered by time.
    pub data: BTreeMap<String, Vec<ScheduleInfo>>,
    /// Number of rows across all dates.
    pub total: usize,
}

/// One row of a city's reference schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityScheduleInfo {
    pub id: i64,
    pub city: String,
    pub province: String,
    pub prayer_name: String,
    pub time: String,
    pub date: String,
}

/// A city in the location reference list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityInfo {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// A province in the location reference list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceInfo {
    pub province: String,
    /// IANA zone name.
    pub timezone: String,
    pub cities: Vec<CityInfo>,
}

/// API request to save the caller's location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetLocationRequest {
    pub city: Option<String>,
    pub province: Option<String>,
}

/// A (city, province) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub city: String,
    pub province: String,
}

/// A saved user location, as listed to admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLocationInfo {
    pub user_id: String,
    pub city: String,
    pub province: String,
    pub updated_at: String,
}

/// Result of a completed yearly generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScheduleResponse {
    pub year: i32,
    pub cities: usize,
    pub rows_written: usize,
}
