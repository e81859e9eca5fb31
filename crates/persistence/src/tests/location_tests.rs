// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::PersistenceError;
use crate::tests::persistence_with_user;

#[test]
fn test_user_location_absent_until_saved() {
    let mut persistence = persistence_with_user();
    assert!(persistence.get_user_location("user-u1").unwrap().is_none());
}

#[test]
fn test_upsert_user_location_replaces_previous_value() {
    let mut persistence = persistence_with_user();
    persistence
        .upsert_user_location("user-u1", "DKI Jakarta", "Jakarta Pusat")
        .unwrap();
    persistence
        .upsert_user_location("user-u1", "Bali", "Denpasar")
        .unwrap();

    let location = persistence.get_user_location("user-u1").unwrap().unwrap();
    assert_eq!(location.province, "Bali");
    assert_eq!(location.city, "Denpasar");
    assert_eq!(persistence.list_user_locations().unwrap().len(), 1);
}

#[test]
fn test_upsert_user_location_requires_existing_user() {
    let mut persistence = persistence_with_user();
    let result = persistence.upsert_user_location("user-ghost", "Bali", "Denpasar");
    assert!(matches!(result, Err(PersistenceError::ForeignKeyViolation(_))));
    assert!(persistence.list_user_locations().unwrap().is_empty());
}
