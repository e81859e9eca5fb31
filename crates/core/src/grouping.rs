// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

/// A schedule row that can be grouped by its date.
///
/// Dates are `YYYY-MM-DD` and times `HH:MM:SS`, so lexical order is
/// chronological order.
pub trait Scheduled {
    fn schedule_date(&self) -> &str;
    fn schedule_time(&self) -> &str;
}

/// Rows grouped into days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedSchedule<T> {
    /// Dates ascending; each day's rows ordered by time ascending.
    pub days: BTreeMap<String, Vec<T>>,
    /// Number of rows across all days.
    pub total: usize,
}

impl<T> Default for GroupedSchedule<T> {
    fn default() -> Self {
        Self {
            days: BTreeMap::new(),
            total: 0,
        }
    }
}

/// Groups rows by date, sorting each day by time.
pub fn group_by_date<T, I>(rows: I) -> GroupedSchedule<T>
where
    T: Scheduled,
    I: IntoIterator<Item = T>,
{
    let mut grouped = GroupedSchedule::default();
    for row in rows {
        grouped
            .days
            .entry(row.schedule_date().to_string())
            .or_insert_with(Vec::new)
            .push(row);
        grouped.total += 1;
    }
    for day in grouped.days.values_mut() {
        day.sort_by(|a, b| a.schedule_time().cmp(b.schedule_time()));
    }
    grouped
}
