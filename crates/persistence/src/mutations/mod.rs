// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `users`: Accounts, sessions and running text
//! - `schedules`: Reference schedule upserts and user schedule replacement
//! - `locations`: Saved user locations
//! - `contents`: Display content metadata
//!
//! Multi-statement writes run inside `Connection::transaction` so a failure
//! leaves the previous state visible.

pub mod contents;
pub mod locations;
pub mod schedules;
pub mod users;
