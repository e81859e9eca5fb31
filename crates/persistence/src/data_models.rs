// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A stored user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub user_id: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub running_text: String,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

/// A stored bearer session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub user_id: String,
    pub created_at: String,
    pub expires_at: String,
}

/// One row of the shared reference schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleData {
    pub schedule_id: i64,
    pub province: String,
    pub city: String,
    pub prayer_name: String,
    pub prayer_time: String,
    pub schedule_date: String,
}

/// One row of a user's override schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserScheduleData {
    pub user_schedule_id: i64,
    pub user_id: String,
    pub prayer_name: String,
    pub prayer_time: String,
    pub schedule_date: String,
    pub created_at: String,
}

/// A user's saved display location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLocationData {
    pub user_id: String,
    pub province: String,
    pub city: String,
    pub updated_at: String,
}

/// Stored content metadata. `image_urls` is decoded from its JSON column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentData {
    pub content_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub content_type: String,
    pub image_urls: Vec<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields written when creating or replacing content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentFields {
    pub title: String,
    pub description: Option<String>,
    pub content_type: String,
    pub image_urls: Vec<String>,
    pub is_active: bool,
}
