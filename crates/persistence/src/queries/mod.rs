// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `users`: Accounts and bearer sessions
//! - `schedules`: Reference schedule and per-user override rows
//! - `locations`: Saved user locations
//! - `contents`: Display content metadata

pub mod contents;
pub mod locations;
pub mod schedules;
pub mod users;
