// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers are synchronous and take the persistence layer by mutable
//! reference; the server decides how access to it is shared.

use jadwal::{CancellationToken, CitySchedule, group_by_date};
use jadwal_domain::{
    CalculationParameters, DEFAULT_CITY, DEFAULT_PROVINCE, ScheduleDate, ScheduleEntry,
    all_locations, provinces, validate_date_range, validate_location, validate_schedule_entry,
};
use jadwal_persistence::{
    ContentData, ContentFields, PersistenceError, ScheduleData, SqlitePersistence, UserData,
    UserScheduleData,
};
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;
use tracing::info;

use crate::auth::{AuthenticatedUser, AuthenticationService, AuthorizationService, Role};
use crate::error::{ApiError, translate_core_error};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    CityInfo, CityScheduleInfo, ContentInfo, ContentRequest, CreateUserRequest,
    GenerateScheduleResponse, GroupedScheduleResponse, LocationInfo, LoginRequest, LoginResponse,
    ProvinceInfo, RunningTextResponse, ScheduleInfo, SetLocationRequest, SetRunningTextRequest,
    SyncRequest, SyncResponse, UpdateUserRequest, UserInfo, UserLocationInfo,
};

/// Years accepted by yearly generation.
const GENERATION_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

fn invalid_input(field: &str, message: &str) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn user_info(user: UserData) -> UserInfo {
    UserInfo {
        id: user.user_id,
        username: user.username,
        role: user.role,
        is_active: user.is_active,
    }
}

fn content_info(content: ContentData) -> ContentInfo {
    ContentInfo {
        id: content.content_id,
        title: content.title,
        description: content.description,
        content_type: content.content_type,
        image_urls: content.image_urls,
        is_active: content.is_active,
        created_at: content.created_at,
        updated_at: content.updated_at,
    }
}

fn schedule_info(row: ScheduleData) -> ScheduleInfo {
    ScheduleInfo {
        id: row.schedule_id,
        prayer_name: row.prayer_name,
        time: row.prayer_time,
        date: row.schedule_date,
    }
}

fn user_schedule_info(row: UserScheduleData) -> ScheduleInfo {
    ScheduleInfo {
        id: row.user_schedule_id,
        prayer_name: row.prayer_name,
        time: row.prayer_time,
        date: row.schedule_date,
    }
}

fn grouped(rows: Vec<ScheduleData>) -> GroupedScheduleResponse {
    let grouped = group_by_date(rows.into_iter().map(schedule_info));
    GroupedScheduleResponse {
        data: grouped.days,
        total: grouped.total,
    }
}

/// Parses an optional `?date=` filter. Empty values mean "no filter".
fn optional_date(date: Option<&str>) -> Result<Option<String>, ApiError> {
    date.filter(|d| !d.is_empty())
        .map(|d| ScheduleDate::parse(d).map(|d| d.to_string()))
        .transpose()
        .map_err(ApiError::from)
}

// ========================================================================
// Authentication
// ========================================================================

/// Logs a user in and returns a bearer token.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The login request
/// * `session_ttl` - Lifetime of the new session
///
/// # Errors
///
/// Returns an error if:
/// - The username or password is empty
/// - The credentials do not match an active account
/// - Database operations fail
pub fn login(
    persistence: &mut SqlitePersistence,
    request: &LoginRequest,
    session_ttl: time::Duration,
) -> Result<LoginResponse, ApiError> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(invalid_input(
            "username",
            "Username and password are required",
        ));
    }

    let (token, expires_at, user) = AuthenticationService::login(
        persistence,
        &request.username,
        &request.password,
        session_ttl,
    )?;

    Ok(LoginResponse {
        token,
        expires_at,
        user: user_info(user),
    })
}

/// Ends the session identified by `session_token`.
///
/// # Errors
///
/// Returns an error if the session cannot be deleted.
pub fn logout(persistence: &mut SqlitePersistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

// ========================================================================
// User management
// ========================================================================

/// Lists every account. Admin only.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the query fails.
pub fn list_users(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedUser,
) -> Result<Vec<UserInfo>, ApiError> {
    AuthorizationService::require_admin(actor, "list_users")?;
    Ok(persistence
        .list_users()?
        .into_iter()
        .map(user_info)
        .collect())
}

/// Creates an account. Admin only.
///
/// The account ID is `user-` followed by the lowercased username.
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not an admin
/// - The username or password is missing
/// - The role is not `admin` or `user`
/// - The password fails the password policy
/// - The username is already taken
pub fn create_user(
    persistence: &mut SqlitePersistence,
    request: &CreateUserRequest,
    actor: &AuthenticatedUser,
) -> Result<UserInfo, ApiError> {
    AuthorizationService::require_admin(actor, "create_user")?;

    let username = request.username.trim();
    if username.is_empty() || request.password.is_empty() {
        return Err(invalid_input(
            "username",
            "Username and password are required",
        ));
    }

    let role: Role = request
        .role
        .as_deref()
        .unwrap_or("user")
        .parse::<Role>()
        .map_err(|_| invalid_input("role", "Role must be 'admin' or 'user'"))?;

    PasswordPolicy::default().validate(&request.password, username)?;

    let user_id = format!("user-{}", username.to_lowercase());
    match persistence.create_user(&user_id, username, &request.password, role.as_str()) {
        Ok(()) => {}
        Err(PersistenceError::UniqueViolation(_)) => {
            return Err(invalid_input("username", "Username already exists"));
        }
        Err(e) => return Err(e.into()),
    }
    info!(user_id, role = %role, created_by = %actor.id, "Created user");

    let user = persistence
        .get_user_by_id(&user_id)?
        .ok_or_else(|| ApiError::Internal {
            message: String::from("User not found after creation"),
        })?;
    Ok(user_info(user))
}

/// Activates or deactivates an account. Admin only.
///
/// Deactivation ends the account's sessions.
///
/// # Errors
///
/// Returns an error if the caller is not an admin, `isActive` is missing,
/// the admin targets their own account, or the account does not exist.
pub fn update_user(
    persistence: &mut SqlitePersistence,
    user_id: &str,
    request: &UpdateUserRequest,
    actor: &AuthenticatedUser,
) -> Result<UserInfo, ApiError> {
    AuthorizationService::require_admin(actor, "update_user")?;

    let is_active = request
        .is_active
        .ok_or_else(|| invalid_input("isActive", "isActive is required"))?;
    if !is_active && actor.id == user_id {
        return Err(invalid_input(
            "isActive",
            "You cannot deactivate your own account",
        ));
    }

    persistence.set_user_active(user_id, is_active)?;
    info!(user_id, is_active, updated_by = %actor.id, "Updated user");

    let user = persistence
        .get_user_by_id(user_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: format!("User '{user_id}' not found"),
        })?;
    Ok(user_info(user))
}

/// Deletes an account and everything it owns. Admin only.
///
/// # Errors
///
/// Returns an error if the caller is not an admin, targets their own
/// account, or the account does not exist.
pub fn delete_user(
    persistence: &mut SqlitePersistence,
    user_id: &str,
    actor: &AuthenticatedUser,
) -> Result<(), ApiError> {
    AuthorizationService::require_admin(actor, "delete_user")?;
    if actor.id == user_id {
        return Err(invalid_input("id", "You cannot delete your own account"));
    }

    persistence.delete_user(user_id)?;
    info!(user_id, deleted_by = %actor.id, "Deleted user");
    Ok(())
}

// ========================================================================
// Running text
// ========================================================================

/// Returns a display's running text. Public.
///
/// # Errors
///
/// Returns an error if the account does not exist.
pub fn get_running_text(
    persistence: &mut SqlitePersistence,
    user_id: &str,
) -> Result<RunningTextResponse, ApiError> {
    let user = persistence
        .get_user_by_id(user_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: String::from("User not found"),
        })?;

    Ok(RunningTextResponse {
        running_text: user.running_text,
        user_id: user.user_id,
    })
}

/// Sets a display's running text.
///
/// Users may only change their own banner; admins may change any.
///
/// # Errors
///
/// Returns an error if either field is missing, the caller may not edit
/// the target, or the account does not exist.
pub fn set_running_text(
    persistence: &mut SqlitePersistence,
    request: &SetRunningTextRequest,
    actor: &AuthenticatedUser,
) -> Result<RunningTextResponse, ApiError> {
    let (Some(running_text), Some(user_id)) = (
        request.running_text.as_deref(),
        request.user_id.as_deref().filter(|id| !id.is_empty()),
    ) else {
        return Err(invalid_input(
            "runningText",
            "Running text and user ID are required",
        ));
    };

    AuthorizationService::require_self_or_admin(actor, user_id, "set_running_text")?;
    persistence.set_running_text(user_id, running_text)?;
    info!(user_id, updated_by = %actor.id, "Updated running text");

    Ok(RunningTextResponse {
        running_text: running_text.to_string(),
        user_id: user_id.to_string(),
    })
}

// ========================================================================
// Content
// ========================================================================

/// Lists active content, newest first. Public.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_contents(persistence: &mut SqlitePersistence) -> Result<Vec<ContentInfo>, ApiError> {
    Ok(persistence
        .list_active_contents()?
        .into_iter()
        .map(content_info)
        .collect())
}

/// Returns one content item. Public.
///
/// # Errors
///
/// Returns an error if the item does not exist.
pub fn get_content(
    persistence: &mut SqlitePersistence,
    content_id: i64,
) -> Result<ContentInfo, ApiError> {
    persistence
        .get_content(content_id)?
        .map(content_info)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Content"),
            message: String::from("Content not found"),
        })
}

fn content_fields(request: &ContentRequest, is_active: bool) -> Result<ContentFields, ApiError> {
    if request.title.trim().is_empty() || request.content_type.trim().is_empty() {
        return Err(invalid_input("title", "Title and type are required"));
    }
    Ok(ContentFields {
        title: request.title.trim().to_string(),
        description: request.description.clone().filter(|d| !d.is_empty()),
        content_type: request.content_type.trim().to_string(),
        image_urls: request.image_urls.clone(),
        is_active,
    })
}

/// Creates a content item. Admin only.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the title or type is
/// missing.
pub fn create_content(
    persistence: &mut SqlitePersistence,
    request: &ContentRequest,
    actor: &AuthenticatedUser,
) -> Result<ContentInfo, ApiError> {
    AuthorizationService::require_admin(actor, "create_content")?;
    let fields = content_fields(request, true)?;
    let content_id = persistence.create_content(&fields)?;
    info!(content_id, created_by = %actor.id, "Created content");
    get_content(persistence, content_id)
}

/// Replaces a content item. Admin only.
///
/// An absent `isActive` keeps the item's current state.
///
/// # Errors
///
/// Returns an error if the caller is not an admin, a required field is
/// missing, or the item does not exist.
pub fn update_content(
    persistence: &mut SqlitePersistence,
    content_id: i64,
    request: &ContentRequest,
    actor: &AuthenticatedUser,
) -> Result<ContentInfo, ApiError> {
    AuthorizationService::require_admin(actor, "update_content")?;
    let current = get_content(persistence, content_id)?;
    let fields = content_fields(request, request.is_active.unwrap_or(current.is_active))?;
    persistence.update_content(content_id, &fields)?;
    info!(content_id, updated_by = %actor.id, "Updated content");
    get_content(persistence, content_id)
}

/// Deletes a content item. Admin only.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the item does not exist.
pub fn delete_content(
    persistence: &mut SqlitePersistence,
    content_id: i64,
    actor: &AuthenticatedUser,
) -> Result<(), ApiError> {
    AuthorizationService::require_admin(actor, "delete_content")?;
    persistence.delete_content(content_id)?;
    info!(content_id, deleted_by = %actor.id, "Deleted content");
    Ok(())
}

// ========================================================================
// Schedule sync
// ========================================================================

/// Replaces the caller's override schedule with the submitted entries.
///
/// Every entry is validated before anything is written; the replacement
/// itself is a single transaction, so a failure leaves the previous list.
///
/// # Errors
///
/// Returns an error if `prayerSchedules` is missing, any entry is invalid,
/// or storage fails.
pub fn sync_user_schedules(
    persistence: &mut SqlitePersistence,
    request: &SyncRequest,
    actor: &AuthenticatedUser,
) -> Result<SyncResponse, ApiError> {
    let submitted = request
        .prayer_schedules
        .as_ref()
        .ok_or_else(|| invalid_input("prayerSchedules", "prayerSchedules must be an array"))?;

    let entries = submitted
        .iter()
        .map(|entry| validate_schedule_entry(&entry.prayer_name, &entry.time, &entry.date))
        .collect::<Result<Vec<ScheduleEntry>, _>>()?;

    persistence.replace_user_schedules(&actor.id, &entries)?;

    let last_sync = OffsetDateTime::now_utc()
        .format(&Iso8601::DEFAULT)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to format sync time: {e}"),
        })?;
    let data = persistence
        .list_user_schedules(&actor.id)?
        .into_iter()
        .map(user_schedule_info)
        .collect();

    Ok(SyncResponse { data, last_sync })
}

/// The caller's override schedule, newest date first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn latest_user_schedules(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedUser,
) -> Result<Vec<ScheduleInfo>, ApiError> {
    Ok(persistence
        .list_user_schedules_latest(&actor.id)?
        .into_iter()
        .map(user_schedule_info)
        .collect())
}

/// The caller's saved location, or the default when none is saved.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_user_location(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedUser,
) -> Result<LocationInfo, ApiError> {
    Ok(persistence.get_user_location(&actor.id)?.map_or_else(
        || LocationInfo {
            city: DEFAULT_CITY.to_string(),
            province: DEFAULT_PROVINCE.to_string(),
        },
        |saved| LocationInfo {
            city: saved.city,
            province: saved.province,
        },
    ))
}

/// Reference schedule for the caller's location, grouped by date.
///
/// # Errors
///
/// Returns an error if `date` is malformed or the query fails.
pub fn list_schedules(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedUser,
    date: Option<&str>,
) -> Result<GroupedScheduleResponse, ApiError> {
    let date = optional_date(date)?;
    let location = get_user_location(persistence, actor)?;
    let rows = persistence.list_city_schedules(&location.city, date.as_deref())?;
    Ok(grouped(rows))
}

/// Reference schedule for the caller's location on `today`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn today_schedules(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedUser,
    today: ScheduleDate,
) -> Result<Vec<ScheduleInfo>, ApiError> {
    let location = get_user_location(persistence, actor)?;
    let today = today.to_string();
    Ok(persistence
        .list_city_schedules(&location.city, Some(&today))?
        .into_iter()
        .map(schedule_info)
        .collect())
}

/// Reference schedule for the caller's location within an inclusive range.
///
/// The range is validated before any query runs.
///
/// # Errors
///
/// Returns an error if either bound is missing or malformed, the start is
/// after the end, or the query fails.
pub fn range_schedules(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedUser,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<GroupedScheduleResponse, ApiError> {
    let range = validate_date_range(start_date, end_date)?;
    let location = get_user_location(persistence, actor)?;
    let rows = persistence.list_city_schedules_in_range(
        &location.city,
        &range.start().to_string(),
        &range.end().to_string(),
    )?;
    Ok(grouped(rows))
}

/// Reference schedule for an explicit city, ordered by date then time.
///
/// Unknown cities simply have no rows.
///
/// # Errors
///
/// Returns an error if `date` is malformed or the query fails.
pub fn city_schedules(
    persistence: &mut SqlitePersistence,
    city: &str,
    date: Option<&str>,
) -> Result<Vec<CityScheduleInfo>, ApiError> {
    let date = optional_date(date)?;
    Ok(persistence
        .list_city_schedules(city, date.as_deref())?
        .into_iter()
        .map(|row| CityScheduleInfo {
            id: row.schedule_id,
            city: row.city,
            province: row.province,
            prayer_name: row.prayer_name,
            time: row.prayer_time,
            date: row.schedule_date,
        })
        .collect())
}

/// The static province and city reference list.
#[must_use]
pub fn list_locations() -> Vec<ProvinceInfo> {
    provinces()
        .iter()
        .map(|province| ProvinceInfo {
            province: province.name.to_string(),
            timezone: province.timezone.name().to_string(),
            cities: province
                .cities
                .iter()
                .map(|city| CityInfo {
                    name: city.name.to_string(),
                    lat: city.latitude,
                    lon: city.longitude,
                })
                .collect(),
        })
        .collect()
}

/// Saves the caller's location after checking it against the reference list.
///
/// # Errors
///
/// Returns an error if either field is missing, the pair is not in the
/// reference list, or storage fails. Nothing is written on error.
pub fn set_user_location(
    persistence: &mut SqlitePersistence,
    request: &SetLocationRequest,
    actor: &AuthenticatedUser,
) -> Result<LocationInfo, ApiError> {
    let (Some(city), Some(province)) = (
        request.city.as_deref().filter(|c| !c.is_empty()),
        request.province.as_deref().filter(|p| !p.is_empty()),
    ) else {
        return Err(invalid_input("city", "City and province are required"));
    };

    let location = validate_location(province, city)?;
    persistence.upsert_user_location(
        &actor.id,
        location.province_name(),
        location.city_name(),
    )?;
    info!(
        user_id = %actor.id,
        province = location.province_name(),
        city = location.city_name(),
        "Saved user location"
    );

    Ok(LocationInfo {
        city: location.city_name().to_string(),
        province: location.province_name().to_string(),
    })
}

/// Every saved user location. Admin only.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the query fails.
pub fn list_user_locations(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedUser,
) -> Result<Vec<UserLocationInfo>, ApiError> {
    AuthorizationService::require_admin(actor, "list_user_locations")?;
    Ok(persistence
        .list_user_locations()?
        .into_iter()
        .map(|saved| UserLocationInfo {
            user_id: saved.user_id,
            city: saved.city,
            province: saved.province,
            updated_at: saved.updated_at,
        })
        .collect())
}

/// One user's saved location. Admin only.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the user has no saved
/// location.
pub fn get_saved_user_location(
    persistence: &mut SqlitePersistence,
    user_id: &str,
    actor: &AuthenticatedUser,
) -> Result<UserLocationInfo, ApiError> {
    AuthorizationService::require_admin(actor, "get_user_location")?;
    persistence
        .get_user_location(user_id)?
        .map(|saved| UserLocationInfo {
            user_id: saved.user_id,
            city: saved.city,
            province: saved.province,
            updated_at: saved.updated_at,
        })
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("User location"),
            message: String::from("Location not found for user"),
        })
}

// ========================================================================
// Yearly generation
// ========================================================================

/// Generates the reference schedule of `year` for every city.
///
/// `store` persists one city at a time; cities it has committed stay
/// committed if a later city fails or the token is cancelled.
///
/// # Arguments
///
/// * `year` - The calendar year to generate
/// * `parameters` - Calculation method and Asr madhab
/// * `cancellation` - Checked before each city
/// * `store` - Persists one city's schedule and returns the rows written
///
/// # Errors
///
/// Returns an invalid-input error if `year` is outside 1..=9999, or an
/// internal error naming how many cities were committed if the run is
/// cancelled or a city fails to calculate or store.
pub fn generate_yearly_schedule<F>(
    year: i32,
    parameters: &CalculationParameters,
    cancellation: &CancellationToken,
    mut store: F,
) -> Result<GenerateScheduleResponse, ApiError>
where
    F: FnMut(&CitySchedule) -> Result<usize, PersistenceError>,
{
    if !GENERATION_YEARS.contains(&year) {
        return Err(invalid_input(
            "year",
            &format!("Year must be between 1 and 9999, got {year}"),
        ));
    }

    let summary = jadwal::generate_yearly_schedule(
        year,
        parameters,
        all_locations(),
        cancellation,
        |schedule| store(&schedule),
    )
    .map_err(translate_core_error)?;

    Ok(GenerateScheduleResponse {
        year: summary.year,
        cities: summary.cities,
        rows_written: summary.rows_written,
    })
}
