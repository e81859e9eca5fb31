// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for schedule sync and schedule queries.

use jadwal_domain::ScheduleDate;

use crate::tests::helpers::{create_display_user, setup, store_city_days};
use crate::{
    ApiError, ScheduleEntryRequest, SetLocationRequest, SyncRequest, city_schedules,
    latest_user_schedules, list_schedules, range_schedules, set_user_location,
    sync_user_schedules, today_schedules,
};

fn entry(prayer_name: &str, time: &str, date: &str) -> ScheduleEntryRequest {
    ScheduleEntryRequest {
        prayer_name: prayer_name.to_string(),
        time: time.to_string(),
        date: date.to_string(),
    }
}

fn sync_request(entries: Vec<ScheduleEntryRequest>) -> SyncRequest {
    SyncRequest {
        prayer_schedules: Some(entries),
    }
}

#[test]
fn test_sync_is_idempotent() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");
    let request = sync_request(vec![
        entry("Fajr", "04:35", "2026-01-01"),
        entry("Dhuhr", "12:01:00", "2026-01-01"),
    ]);

    let first = sync_user_schedules(&mut persistence, &request, &display).unwrap();
    let second = sync_user_schedules(&mut persistence, &request, &display).unwrap();

    let strip = |rows: &[crate::ScheduleInfo]| -> Vec<(String, String, String)> {
        rows.iter()
            .map(|r| (r.prayer_name.clone(), r.time.clone(), r.date.clone()))
            .collect()
    };
    assert_eq!(strip(&first.data), strip(&second.data));
    assert_eq!(second.data.len(), 2);
    assert_eq!(second.data[0].time, "04:35:00");
    assert!(!second.last_sync.is_empty());
}

#[test]
fn test_invalid_sync_entry_changes_nothing() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");
    sync_user_schedules(
        &mut persistence,
        &sync_request(vec![entry("Isha", "19:05", "2026-01-01")]),
        &display,
    )
    .unwrap();

    let bad_name = sync_user_schedules(
        &mut persistence,
        &sync_request(vec![
            entry("Fajr", "04:35", "2026-01-02"),
            entry("Tahajjud", "02:00", "2026-01-02"),
        ]),
        &display,
    );
    assert!(matches!(bad_name, Err(ApiError::InvalidInput { field, .. }) if field == "prayerName"));

    let bad_time = sync_user_schedules(
        &mut persistence,
        &sync_request(vec![entry("Fajr", "25:00", "2026-01-02")]),
        &display,
    );
    assert!(matches!(bad_time, Err(ApiError::InvalidInput { .. })));

    let missing = sync_user_schedules(
        &mut persistence,
        &SyncRequest {
            prayer_schedules: None,
        },
        &display,
    );
    assert!(matches!(missing, Err(ApiError::InvalidInput { .. })));

    let latest = latest_user_schedules(&mut persistence, &display).unwrap();
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].prayer_name, "Isha");
}

#[test]
fn test_sync_with_empty_list_clears_overrides() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");
    sync_user_schedules(
        &mut persistence,
        &sync_request(vec![entry("Isha", "19:05", "2026-01-01")]),
        &display,
    )
    .unwrap();

    let cleared = sync_user_schedules(&mut persistence, &sync_request(vec![]), &display).unwrap();
    assert!(cleared.data.is_empty());
}

#[test]
fn test_latest_orders_newest_date_first() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");
    sync_user_schedules(
        &mut persistence,
        &sync_request(vec![
            entry("Maghrib", "18:10", "2026-01-01"),
            entry("Fajr", "04:35", "2026-01-01"),
            entry("Fajr", "04:36", "2026-01-02"),
        ]),
        &display,
    )
    .unwrap();

    let dates: Vec<(String, String)> = latest_user_schedules(&mut persistence, &display)
        .unwrap()
        .into_iter()
        .map(|r| (r.date, r.time))
        .collect();
    assert_eq!(
        dates,
        vec![
            (String::from("2026-01-02"), String::from("04:36:00")),
            (String::from("2026-01-01"), String::from("04:35:00")),
            (String::from("2026-01-01"), String::from("18:10:00")),
        ]
    );
}

#[test]
fn test_list_uses_default_location_and_groups_by_date() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");
    store_city_days(&mut persistence, "Jakarta Pusat", "2026-02-01", "2026-02-03");
    store_city_days(&mut persistence, "Bandung", "2026-02-01", "2026-02-03");

    let listed = list_schedules(&mut persistence, &display, None).unwrap();
    assert_eq!(listed.total, 15);
    let dates: Vec<&String> = listed.data.keys().collect();
    assert_eq!(dates, vec!["2026-02-01", "2026-02-02", "2026-02-03"]);
    for day in listed.data.values() {
        assert_eq!(day.len(), 5);
        let names: Vec<&str> = day.iter().map(|r| r.prayer_name.as_str()).collect();
        assert_eq!(names, vec!["Fajr", "Dhuhr", "Asr", "Maghrib", "Isha"]);
    }

    let one_day = list_schedules(&mut persistence, &display, Some("2026-02-02")).unwrap();
    assert_eq!(one_day.total, 5);
    assert_eq!(one_day.data.len(), 1);

    assert!(matches!(
        list_schedules(&mut persistence, &display, Some("02/02/2026")),
        Err(ApiError::InvalidInput { .. })
    ));
}

#[test]
fn test_queries_follow_saved_location() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");
    store_city_days(&mut persistence, "Jakarta Pusat", "2026-02-01", "2026-02-01");
    store_city_days(&mut persistence, "Makassar", "2026-02-01", "2026-02-01");

    set_user_location(
        &mut persistence,
        &SetLocationRequest {
            city: Some(String::from("Makassar")),
            province: Some(String::from("Sulawesi Selatan")),
        },
        &display,
    )
    .unwrap();

    let today = ScheduleDate::parse("2026-02-01").unwrap();
    let rows = today_schedules(&mut persistence, &display, today).unwrap();
    let expected = city_schedules(&mut persistence, "Makassar", Some("2026-02-01")).unwrap();
    assert_eq!(rows.len(), 5);
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let expected_ids: Vec<i64> = expected.iter().map(|r| r.id).collect();
    assert_eq!(ids, expected_ids);
}

#[test]
fn test_today_without_rows_is_empty() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");
    let today = ScheduleDate::parse("2030-06-01").unwrap();
    assert!(
        today_schedules(&mut persistence, &display, today)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_range_validation_and_ordering() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");
    store_city_days(&mut persistence, "Jakarta Pusat", "2026-03-01", "2026-03-10");

    let ranged = range_schedules(
        &mut persistence,
        &display,
        Some("2026-03-02"),
        Some("2026-03-04"),
    )
    .unwrap();
    assert_eq!(ranged.total, 15);
    assert_eq!(
        ranged.data.keys().cloned().collect::<Vec<_>>(),
        vec!["2026-03-02", "2026-03-03", "2026-03-04"]
    );
    for day in ranged.data.values() {
        let times: Vec<&str> = day.iter().map(|r| r.time.as_str()).collect();
        let mut sorted = times.clone();
        sorted.sort_unstable();
        assert_eq!(times, sorted);
    }

    let reversed = range_schedules(
        &mut persistence,
        &display,
        Some("2026-03-04"),
        Some("2026-03-02"),
    );
    assert!(matches!(reversed, Err(ApiError::InvalidInput { .. })));

    let missing = range_schedules(&mut persistence, &display, Some("2026-03-04"), None);
    assert_eq!(
        missing,
        Err(ApiError::InvalidInput {
            field: String::from("endDate"),
            message: String::from("Start date and end date are required"),
        })
    );
}

#[test]
fn test_city_schedules() {
    let mut persistence = setup();
    store_city_days(&mut persistence, "Medan", "2026-04-01", "2026-04-02");

    let rows = city_schedules(&mut persistence, "Medan", None).unwrap();
    assert_eq!(rows.len(), 10);
    assert!(rows.iter().all(|r| r.province == "Sumatera Utara"));
    assert_eq!(rows[0].date, "2026-04-01");
    assert_eq!(rows[0].prayer_name, "Fajr");
    assert_eq!(rows[9].date, "2026-04-02");

    assert!(
        city_schedules(&mut persistence, "Atlantis", None)
            .unwrap()
            .is_empty()
    );
}
