// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for content metadata handlers.

use crate::tests::helpers::{admin, create_display_user, setup};
use crate::{
    ApiError, ContentRequest, create_content, delete_content, get_content, list_contents,
    update_content,
};

fn poster(title: &str) -> ContentRequest {
    ContentRequest {
        title: title.to_string(),
        description: Some(String::from("Pengajian akbar")),
        content_type: String::from("poster"),
        image_urls: vec![String::from("/uploads/poster.jpg")],
        is_active: None,
    }
}

#[test]
fn test_create_and_fetch_content() {
    let mut persistence = setup();

    let created = create_content(&mut persistence, &poster("Tabligh"), &admin()).unwrap();
    assert_eq!(created.title, "Tabligh");
    assert_eq!(created.content_type, "poster");
    assert!(created.is_active);

    let fetched = get_content(&mut persistence, created.id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(list_contents(&mut persistence).unwrap(), vec![created]);
}

#[test]
fn test_content_requires_title_and_type() {
    let mut persistence = setup();
    let mut request = poster("  ");
    assert!(matches!(
        create_content(&mut persistence, &request, &admin()),
        Err(ApiError::InvalidInput { .. })
    ));

    request.title = String::from("Tabligh");
    request.content_type = String::new();
    assert!(matches!(
        create_content(&mut persistence, &request, &admin()),
        Err(ApiError::InvalidInput { .. })
    ));
}

#[test]
fn test_only_admins_change_content() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");

    assert!(matches!(
        create_content(&mut persistence, &poster("Tabligh"), &display),
        Err(ApiError::Unauthorized { .. })
    ));

    let created = create_content(&mut persistence, &poster("Tabligh"), &admin()).unwrap();
    assert!(matches!(
        delete_content(&mut persistence, created.id, &display),
        Err(ApiError::Unauthorized { .. })
    ));
}

#[test]
fn test_update_can_hide_content() {
    let mut persistence = setup();
    let created = create_content(&mut persistence, &poster("Tabligh"), &admin()).unwrap();

    let mut request = poster("Tabligh Akbar");
    request.is_active = Some(false);
    let updated = update_content(&mut persistence, created.id, &request, &admin()).unwrap();

    assert_eq!(updated.title, "Tabligh Akbar");
    assert!(!updated.is_active);
    assert!(list_contents(&mut persistence).unwrap().is_empty());

    // Without isActive the current state is kept.
    let kept = update_content(&mut persistence, created.id, &poster("Again"), &admin()).unwrap();
    assert!(!kept.is_active);
}

#[test]
fn test_missing_content_is_not_found() {
    let mut persistence = setup();
    assert!(matches!(
        get_content(&mut persistence, 42),
        Err(ApiError::ResourceNotFound { .. })
    ));
    assert!(matches!(
        update_content(&mut persistence, 42, &poster("x"), &admin()),
        Err(ApiError::ResourceNotFound { .. })
    ));
    assert!(matches!(
        delete_content(&mut persistence, 42, &admin()),
        Err(ApiError::ResourceNotFound { .. })
    ));
}
