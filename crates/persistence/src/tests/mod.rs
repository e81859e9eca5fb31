// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod content_tests;
mod initialization_tests;
mod location_tests;
mod user_tests;

use crate::SqlitePersistence;

/// Opens a fresh database with one ordinary user, `user-u1`.
pub fn persistence_with_user() -> SqlitePersistence {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    persistence
        .create_user("user-u1", "u1", "secret-password", "user")
        .unwrap();
    persistence
}
