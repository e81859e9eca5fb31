// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::http::StatusCode;
use serde_json::json;

use crate::tests::helpers::{admin_token, create_test_app, display_token, send};

#[tokio::test]
async fn test_admin_creates_and_lists_users() {
    let (_, app) = create_test_app();
    let token = admin_token(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(&token),
        Some(json!({"username": "Lobby", "password": "lobby-tv1"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], "user-lobby");
    assert_eq!(body["data"]["role"], "user");

    let (status, body) = send(&app, "GET", "/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_duplicate_username_is_bad_request() {
    let (_, app) = create_test_app();
    let token = admin_token(&app).await;
    let request = json!({"username": "lobby", "password": "lobby-tv1"});

    send(&app, "POST", "/users", Some(&token), Some(request.clone())).await;
    let (status, body) = send(&app, "POST", "/users", Some(&token), Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username already exists");
}

#[tokio::test]
async fn test_display_user_cannot_manage_users() {
    let (_, app) = create_test_app();
    let admin = admin_token(&app).await;
    let display = display_token(&app, &admin, "lobby").await;

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(&display),
        Some(json!({"username": "other", "password": "other-tv1"})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_deactivated_user_session_stops_working() {
    let (_, app) = create_test_app();
    let admin = admin_token(&app).await;
    let display = display_token(&app, &admin, "lobby").await;

    let (status, body) = send(
        &app,
        "PUT",
        "/users/user-lobby",
        Some(&admin),
        Some(json!({"isActive": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isActive"], false);

    let (status, _) = send(&app, "GET", "/sync/user-location", Some(&display), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_unknown_user_is_not_found() {
    let (_, app) = create_test_app();
    let token = admin_token(&app).await;

    let (status, _) = send(&app, "DELETE", "/users/user-ghost", Some(&token), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_running_text_round_trip() {
    let (_, app) = create_test_app();
    let admin = admin_token(&app).await;
    let display = display_token(&app, &admin, "lobby").await;

    let (status, body) = send(&app, "GET", "/running-text/user-lobby", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["runningText"], "");

    let (status, _) = send(
        &app,
        "POST",
        "/running-text",
        Some(&display),
        Some(json!({"runningText": "Selamat datang", "userId": "user-lobby"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/running-text/user-lobby", None, None).await;
    assert_eq!(body["data"]["runningText"], "Selamat datang");
    assert_eq!(body["data"]["userId"], "user-lobby");
}

#[tokio::test]
async fn test_running_text_for_unknown_user_is_not_found() {
    let (_, app) = create_test_app();

    let (status, body) = send(&app, "GET", "/running-text/user-ghost", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn test_content_lifecycle() {
    let (_, app) = create_test_app();
    let token = admin_token(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/content",
        Some(&token),
        Some(json!({
            "title": "Kajian Subuh",
            "type": "poster",
            "imageUrls": ["/uploads/kajian.png"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["isActive"], true);

    let (status, body) = send(&app, "GET", "/content", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["imageUrls"][0], "/uploads/kajian.png");

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/content/{id}"),
        Some(&token),
        Some(json!({"title": "Kajian Subuh", "type": "poster", "isActive": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isActive"], false);

    let (_, body) = send(&app, "GET", "/content", None, None).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, _) = send(&app, "DELETE", &format!("/content/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &format!("/content/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Content not found");
}

#[tokio::test]
async fn test_non_numeric_content_id_is_bad_request() {
    let (_, app) = create_test_app();

    let (status, _) = send(&app, "GET", "/content/abc", None, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_lists_saved_locations() {
    let (_, app) = create_test_app();
    let admin = admin_token(&app).await;
    let display = display_token(&app, &admin, "lobby").await;

    send(
        &app,
        "POST",
        "/sync/set-location",
        Some(&display),
        Some(json!({"city": "Bandung", "province": "Jawa Barat"})),
    )
    .await;

    let (status, body) = send(&app, "GET", "/user-locations", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["userId"], "user-lobby");

    let (status, body) = send(&app, "GET", "/user-locations/user-lobby", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["city"], "Bandung");

    let (status, _) = send(&app, "GET", "/user-locations", Some(&display), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
