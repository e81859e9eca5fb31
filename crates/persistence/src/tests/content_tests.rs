// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ContentFields, PersistenceError, SqlitePersistence};

fn banner(title: &str, is_active: bool) -> ContentFields {
    ContentFields {
        title: title.to_string(),
        description: Some(String::from("Kajian rutin")),
        content_type: String::from("announcement"),
        image_urls: vec![String::from("/uploads/a.jpg"), String::from("/uploads/b.jpg")],
        is_active,
    }
}

#[test]
fn test_content_round_trip_keeps_image_list() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let id = persistence.create_content(&banner("Jumat", true)).unwrap();

    let content = persistence.get_content(id).unwrap().unwrap();
    assert_eq!(content.title, "Jumat");
    assert_eq!(content.image_urls, vec!["/uploads/a.jpg", "/uploads/b.jpg"]);
    assert!(content.is_active);
}

#[test]
fn test_listing_shows_active_items_newest_first() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let first = persistence.create_content(&banner("first", true)).unwrap();
    persistence.create_content(&banner("hidden", false)).unwrap();
    let third = persistence.create_content(&banner("third", true)).unwrap();

    let ids: Vec<i64> = persistence
        .list_active_contents()
        .unwrap()
        .into_iter()
        .map(|c| c.content_id)
        .collect();
    assert_eq!(ids, vec![third, first]);
}

#[test]
fn test_update_and_delete_content() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let id = persistence.create_content(&banner("draft", true)).unwrap();

    let mut fields = banner("final", false);
    fields.image_urls.clear();
    fields.description = None;
    persistence.update_content(id, &fields).unwrap();

    let content = persistence.get_content(id).unwrap().unwrap();
    assert_eq!(content.title, "final");
    assert!(!content.is_active);
    assert!(content.image_urls.is_empty());
    assert!(content.description.is_none());

    persistence.delete_content(id).unwrap();
    assert!(persistence.get_content(id).unwrap().is_none());
    assert!(matches!(
        persistence.delete_content(id),
        Err(PersistenceError::NotFound(_))
    ));
    assert!(matches!(
        persistence.update_content(id, &fields),
        Err(PersistenceError::NotFound(_))
    ));
}
