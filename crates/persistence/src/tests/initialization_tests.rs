// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SqlitePersistence;
use crate::tests::persistence_with_user;

#[test]
fn test_persistence_initialization() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    persistence.verify_foreign_key_enforcement().unwrap();
    assert_eq!(persistence.count_schedules().unwrap(), 0);
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = persistence_with_user();
    let mut db2 = SqlitePersistence::new_in_memory().unwrap();

    assert_eq!(db1.list_users().unwrap().len(), 1);
    assert!(db2.list_users().unwrap().is_empty());
}

#[test]
fn test_file_database_survives_reopen() {
    let path = std::env::temp_dir().join(format!("jadwal-init-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence = SqlitePersistence::new_with_file(&path).unwrap();
        persistence
            .create_user("user-file", "file", "secret-password", "user")
            .unwrap();
        persistence
            .upsert_user_location("user-file", "Jawa Barat", "Bandung")
            .unwrap();
    }

    let mut reopened = SqlitePersistence::new_with_file(&path).unwrap();
    let location = reopened.get_user_location("user-file").unwrap().unwrap();
    assert_eq!(location.city, "Bandung");

    drop(reopened);
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}

