// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP handlers.
//!
//! Each handler extracts and logs its inputs, calls the matching
//! `jadwal_api` operation under the persistence lock, and wraps the result
//! in the response envelope.

use axum::{
    Json,
    extract::{
        Path, Query, State as AxumState,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use jadwal_api::{
    CityScheduleInfo, ContentInfo, ContentRequest, CreateUserRequest, GenerateScheduleResponse,
    GroupedScheduleResponse, LocationInfo, LoginRequest, LoginResponse, ProvinceInfo,
    RunningTextResponse, ScheduleInfo, SetLocationRequest, SetRunningTextRequest, SyncRequest,
    SyncResponse, UpdateUserRequest, UserInfo, UserLocationInfo,
};
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::generation::run_yearly_generation;
use crate::http::{Data, HttpError, JsonEnvelope, Message, body, data, message};
use crate::session::SessionUser;

/// Query parameters for `/sync/list` and `/sync/schedules/{city}`.
#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

/// Query parameters for `/sync/range`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Query parameters for `/sync/generate-yearly-schedule`.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateQuery {
    /// Defaults to the current year in the configured zone.
    pub year: Option<i32>,
}

fn content_id(raw: &str) -> Result<i64, HttpError> {
    raw.parse().map_err(|_| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: format!("Invalid content id '{raw}'"),
    })
}

// ========================================================================
// Health and authentication
// ========================================================================

/// Handler for GET `/health`.
#[allow(clippy::unused_async)]
pub async fn handle_health() -> JsonEnvelope<Message> {
    message("Server is working!")
}

/// Handler for POST `/auth/login`.
pub async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    req: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<JsonEnvelope<Data<LoginResponse>>, HttpError> {
    let Json(req) = req?;
    info!(username = %req.username, "Handling login request");

    let response = jadwal_api::login(
        &mut *app_state.persistence.lock().await,
        &req,
        app_state.config.session_ttl,
    )?;

    info!(user_id = %response.user.id, "Login succeeded");
    Ok(data(response))
}

/// Handler for POST `/auth/logout`.
pub async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, token): SessionUser,
) -> Result<JsonEnvelope<Message>, HttpError> {
    info!(user_id = %user.id, "Handling logout request");

    jadwal_api::logout(&mut *app_state.persistence.lock().await, &token)?;

    Ok(message("Logged out successfully"))
}

// ========================================================================
// Users
// ========================================================================

/// Handler for GET `/users`.
pub async fn handle_list_users(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
) -> Result<JsonEnvelope<Data<Vec<UserInfo>>>, HttpError> {
    let users = jadwal_api::list_users(&mut *app_state.persistence.lock().await, &actor)?;
    Ok(data(users))
}

/// Handler for POST `/users`.
pub async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
    req: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, JsonEnvelope<Data<UserInfo>>), HttpError> {
    let Json(req) = req?;
    info!(actor = %actor.id, username = %req.username, "Handling create_user request");

    let user = jadwal_api::create_user(&mut *app_state.persistence.lock().await, &req, &actor)?;

    info!(user_id = %user.id, role = %user.role, "Created user");
    Ok((StatusCode::CREATED, data(user)))
}

/// Handler for PUT `/users/{id}`.
pub async fn handle_update_user(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
    user_id: Result<Path<String>, PathRejection>,
    req: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<JsonEnvelope<Data<UserInfo>>, HttpError> {
    let Path(user_id) = user_id?;
    let Json(req) = req?;
    info!(
        actor = %actor.id,
        user_id = %user_id,
        is_active = ?req.is_active,
        "Handling update_user request"
    );

    let user =
        jadwal_api::update_user(&mut *app_state.persistence.lock().await, &user_id, &req, &actor)?;
    Ok(data(user))
}

/// Handler for DELETE `/users/{id}`.
pub async fn handle_delete_user(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
    user_id: Result<Path<String>, PathRejection>,
) -> Result<JsonEnvelope<Message>, HttpError> {
    let Path(user_id) = user_id?;
    info!(actor = %actor.id, user_id = %user_id, "Handling delete_user request");

    jadwal_api::delete_user(&mut *app_state.persistence.lock().await, &user_id, &actor)?;

    Ok(message("User deleted successfully"))
}

// ========================================================================
// Running text
// ========================================================================

/// Handler for GET `/running-text/{userId}`. Public.
pub async fn handle_get_running_text(
    AxumState(app_state): AxumState<AppState>,
    user_id: Result<Path<String>, PathRejection>,
) -> Result<JsonEnvelope<Data<RunningTextResponse>>, HttpError> {
    let Path(user_id) = user_id?;

    let text = jadwal_api::get_running_text(&mut *app_state.persistence.lock().await, &user_id)?;
    Ok(data(text))
}

/// Handler for POST `/running-text`.
pub async fn handle_set_running_text(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
    req: Result<Json<SetRunningTextRequest>, JsonRejection>,
) -> Result<JsonEnvelope<Data<RunningTextResponse>>, HttpError> {
    let Json(req) = req?;
    info!(actor = %actor.id, user_id = ?req.user_id, "Handling set_running_text request");

    let text =
        jadwal_api::set_running_text(&mut *app_state.persistence.lock().await, &req, &actor)?;
    Ok(data(text))
}

// ========================================================================
// Content
// ========================================================================

/// Handler for GET `/content`. Public.
pub async fn handle_list_contents(
    AxumState(app_state): AxumState<AppState>,
) -> Result<JsonEnvelope<Data<Vec<ContentInfo>>>, HttpError> {
    let contents = jadwal_api::list_contents(&mut *app_state.persistence.lock().await)?;
    Ok(data(contents))
}

/// Handler for GET `/content/{id}`. Public.
pub async fn handle_get_content(
    AxumState(app_state): AxumState<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<JsonEnvelope<Data<ContentInfo>>, HttpError> {
    let Path(id) = id?;
    let id = content_id(&id)?;

    let content = jadwal_api::get_content(&mut *app_state.persistence.lock().await, id)?;
    Ok(data(content))
}

/// Handler for POST `/content`.
pub async fn handle_create_content(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
    req: Result<Json<ContentRequest>, JsonRejection>,
) -> Result<(StatusCode, JsonEnvelope<Data<ContentInfo>>), HttpError> {
    let Json(req) = req?;
    info!(actor = %actor.id, title = %req.title, "Handling create_content request");

    let content =
        jadwal_api::create_content(&mut *app_state.persistence.lock().await, &req, &actor)?;
    Ok((StatusCode::CREATED, data(content)))
}

/// Handler for PUT `/content/{id}`.
pub async fn handle_update_content(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
    id: Result<Path<String>, PathRejection>,
    req: Result<Json<ContentRequest>, JsonRejection>,
) -> Result<JsonEnvelope<Data<ContentInfo>>, HttpError> {
    let Path(id) = id?;
    let id = content_id(&id)?;
    let Json(req) = req?;
    info!(actor = %actor.id, content_id = id, "Handling update_content request");

    let content =
        jadwal_api::update_content(&mut *app_state.persistence.lock().await, id, &req, &actor)?;
    Ok(data(content))
}

/// Handler for DELETE `/content/{id}`.
pub async fn handle_delete_content(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
    id: Result<Path<String>, PathRejection>,
) -> Result<JsonEnvelope<Message>, HttpError> {
    let Path(id) = id?;
    let id = content_id(&id)?;
    info!(actor = %actor.id, content_id = id, "Handling delete_content request");

    jadwal_api::delete_content(&mut *app_state.persistence.lock().await, id, &actor)?;

    Ok(message("Content deleted successfully"))
}

// ========================================================================
// User locations (admin)
// ========================================================================

/// Handler for GET `/user-locations`.
pub async fn handle_list_user_locations(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
) -> Result<JsonEnvelope<Data<Vec<UserLocationInfo>>>, HttpError> {
    let locations =
        jadwal_api::list_user_locations(&mut *app_state.persistence.lock().await, &actor)?;
    Ok(data(locations))
}

/// Handler for GET `/user-locations/{userId}`.
pub async fn handle_get_saved_user_location(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
    user_id: Result<Path<String>, PathRejection>,
) -> Result<JsonEnvelope<Data<UserLocationInfo>>, HttpError> {
    let Path(user_id) = user_id?;

    let location = jadwal_api::get_saved_user_location(
        &mut *app_state.persistence.lock().await,
        &user_id,
        &actor,
    )?;
    Ok(data(location))
}

// ========================================================================
// Sync
// ========================================================================

/// Handler for POST `/sync`.
///
/// Replaces the caller's override schedule. Body shape is
/// `{success, data, lastSync}`.
pub async fn handle_sync(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
    req: Result<Json<SyncRequest>, JsonRejection>,
) -> Result<JsonEnvelope<SyncResponse>, HttpError> {
    let Json(req) = req?;
    info!(
        user_id = %actor.id,
        entries = req.prayer_schedules.as_ref().map_or(0, Vec::len),
        "Handling sync request"
    );

    let response =
        jadwal_api::sync_user_schedules(&mut *app_state.persistence.lock().await, &req, &actor)?;
    Ok(body(response))
}

/// Handler for GET `/sync/latest`.
pub async fn handle_sync_latest(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
) -> Result<JsonEnvelope<Data<Vec<ScheduleInfo>>>, HttpError> {
    let rows = jadwal_api::latest_user_schedules(&mut *app_state.persistence.lock().await, &actor)?;
    Ok(data(rows))
}

/// Handler for GET `/sync/list?date=`.
pub async fn handle_sync_list(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<JsonEnvelope<GroupedScheduleResponse>, HttpError> {
    let Query(query) = query?;

    let grouped = jadwal_api::list_schedules(
        &mut *app_state.persistence.lock().await,
        &actor,
        query.date.as_deref(),
    )?;
    Ok(body(grouped))
}

/// Handler for GET `/sync/today`.
pub async fn handle_sync_today(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
) -> Result<JsonEnvelope<Data<Vec<ScheduleInfo>>>, HttpError> {
    let today = app_state.config.today();

    let rows =
        jadwal_api::today_schedules(&mut *app_state.persistence.lock().await, &actor, today)?;
    Ok(data(rows))
}

/// Handler for GET `/sync/range?startDate=&endDate=`.
pub async fn handle_sync_range(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Result<JsonEnvelope<GroupedScheduleResponse>, HttpError> {
    let Query(query) = query?;
    info!(
        user_id = %actor.id,
        start = ?query.start_date,
        end = ?query.end_date,
        "Handling range request"
    );

    let grouped = jadwal_api::range_schedules(
        &mut *app_state.persistence.lock().await,
        &actor,
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    )?;
    Ok(body(grouped))
}

/// Handler for POST `/sync/generate-yearly-schedule`.
pub async fn handle_generate_yearly_schedule(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
    query: Result<Query<GenerateQuery>, QueryRejection>,
) -> Result<JsonEnvelope<Data<GenerateScheduleResponse>>, HttpError> {
    let Query(query) = query?;
    let year = query.year.unwrap_or_else(|| app_state.config.current_year());
    info!(user_id = %actor.id, year, "Handling generate_yearly_schedule request");

    let summary = run_yearly_generation(&app_state, year).await?;
    Ok(data(summary))
}

/// Handler for GET `/sync/schedules/{city}?date=`.
pub async fn handle_city_schedules(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(_, _): SessionUser,
    city: Result<Path<String>, PathRejection>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<JsonEnvelope<Data<Vec<CityScheduleInfo>>>, HttpError> {
    let Path(city) = city?;
    let Query(query) = query?;

    let rows = jadwal_api::city_schedules(
        &mut *app_state.persistence.lock().await,
        &city,
        query.date.as_deref(),
    )?;
    Ok(data(rows))
}

/// Handler for GET `/sync/locations`.
#[allow(clippy::unused_async)]
pub async fn handle_locations(
    SessionUser(_, _): SessionUser,
) -> JsonEnvelope<Data<Vec<ProvinceInfo>>> {
    data(jadwal_api::list_locations())
}

/// Handler for POST `/sync/set-location`.
pub async fn handle_set_location(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
    req: Result<Json<SetLocationRequest>, JsonRejection>,
) -> Result<JsonEnvelope<Message>, HttpError> {
    let Json(req) = req?;
    info!(
        user_id = %actor.id,
        city = ?req.city,
        province = ?req.province,
        "Handling set_location request"
    );

    let location =
        jadwal_api::set_user_location(&mut *app_state.persistence.lock().await, &req, &actor)?;

    Ok(message(format!(
        "Location set to {}, {}",
        location.city, location.province
    )))
}

/// Handler for GET `/sync/user-location`.
pub async fn handle_user_location(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _): SessionUser,
) -> Result<JsonEnvelope<Data<LocationInfo>>, HttpError> {
    let location = jadwal_api::get_user_location(&mut *app_state.persistence.lock().await, &actor)?;
    Ok(data(location))
}
