// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for authenticated routes.
//!
//! This module provides an Axum extractor that validates the bearer token
//! and enforces authentication at the server boundary.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use jadwal_api::{AuthenticatedUser, AuthenticationService};
use tracing::{debug, warn};

use crate::AppState;
use crate::http::HttpError;

/// Extractor for authenticated users.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     SessionUser(user, token): SessionUser,
/// ) -> Result<Json<Response>, HttpError> {
///     // user: AuthenticatedUser
///     // token: the raw bearer token
/// }
/// ```
///
/// # Errors
///
/// Rejects with HTTP 401 if:
/// - The Authorization header is missing or not `Bearer <token>`
/// - The token is unknown or expired
/// - The account is inactive or gone
pub struct SessionUser(pub AuthenticatedUser, pub String);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                SessionError::MissingAuthorizationHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid Authorization header encoding");
                SessionError::InvalidAuthorizationHeader
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                warn!("Authorization header does not start with 'Bearer '");
                SessionError::InvalidAuthorizationHeader
            })?;

        let (user, _) =
            AuthenticationService::validate_session(&mut *state.persistence.lock().await, token)
                .map_err(|e| {
                    warn!(error = %e, "Session validation failed");
                    SessionError::InvalidSession(e.to_string())
                })?;

        debug!(user_id = %user.id, role = %user.role, "Session validated");
        Ok(Self(user, token.to_string()))
    }
}

/// Session extraction errors.
#[derive(Debug)]
pub enum SessionError {
    MissingAuthorizationHeader,
    InvalidAuthorizationHeader,
    InvalidSession(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::MissingAuthorizationHeader => String::from("Access token required"),
            Self::InvalidAuthorizationHeader => String::from(
                "Invalid Authorization header format. Expected: 'Bearer <token>'",
            ),
            Self::InvalidSession(reason) => format!("Invalid or expired token: {reason}"),
        };

        HttpError {
            status: StatusCode::UNAUTHORIZED,
            message,
        }
        .into_response()
    }
}
