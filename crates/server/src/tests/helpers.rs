// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Router fixtures for the HTTP tests.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use jadwal::generate_city_schedule;
use jadwal_api::AuthenticationService;
use jadwal_domain::{CalculationParameters, DateRange, ScheduleDate, find_city};
use jadwal_persistence::SqlitePersistence;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::config::ServerConfig;
use crate::{AppState, build_router};

pub const ADMIN_PASSWORD: &str = "admin123";
pub const DISPLAY_PASSWORD: &str = "display-pass1";

/// Helper to create test app state with in-memory persistence and the
/// bootstrap admin.
pub fn create_test_app_state() -> AppState {
    let mut persistence: SqlitePersistence =
        SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence");
    AuthenticationService::ensure_default_admin(&mut persistence, "admin", ADMIN_PASSWORD)
        .expect("Failed to create default admin");
    AppState::new(persistence, ServerConfig::default())
}

pub fn create_test_app() -> (AppState, Router) {
    let state = create_test_app_state();
    let app = build_router(state.clone());
    (state, app)
}

/// Sends one request and returns the status and decoded JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&body_bytes).unwrap();
    (status, value)
}

/// Logs in and returns the bearer token.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(json!({"username": username, "password": password})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["data"]["token"].as_str().unwrap().to_string()
}

pub async fn admin_token(app: &Router) -> String {
    login(app, "admin", ADMIN_PASSWORD).await
}

/// Creates a display account through the API and returns its token.
pub async fn display_token(app: &Router, admin_token: &str, username: &str) -> String {
    let (status, _) = send(
        app,
        "POST",
        "/users",
        Some(admin_token),
        Some(json!({"username": username, "password": DISPLAY_PASSWORD, "role": "user"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    login(app, username, DISPLAY_PASSWORD).await
}

/// Stores the reference schedule of `city` for the inclusive date range.
pub async fn store_city_days(state: &AppState, city: &str, start: &str, end: &str) {
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
    state
        .persistence
        .lock()
        .await
        .upsert_city_schedule(&schedule)
        .unwrap();
}
