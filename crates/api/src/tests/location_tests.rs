// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the location reference list and saved user locations.

use jadwal_domain::all_locations;

use crate::tests::helpers::{admin, create_display_user, setup};
use crate::{
    ApiError, LocationInfo, SetLocationRequest, get_saved_user_location, get_user_location,
    list_locations, list_user_locations, set_user_location,
};

fn set_request(province: &str, city: &str) -> SetLocationRequest {
    SetLocationRequest {
        city: Some(city.to_string()),
        province: Some(province.to_string()),
    }
}

#[test]
fn test_unsaved_location_falls_back_to_default() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");

    assert_eq!(
        get_user_location(&mut persistence, &display).unwrap(),
        LocationInfo {
            city: String::from("Jakarta Pusat"),
            province: String::from("DKI Jakarta"),
        }
    );
}

#[test]
fn test_set_then_get_location() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");

    set_user_location(
        &mut persistence,
        &set_request("DKI Jakarta", "Jakarta Pusat"),
        &display,
    )
    .unwrap();
    set_user_location(&mut persistence, &set_request("Bali", "Denpasar"), &display).unwrap();

    assert_eq!(
        get_user_location(&mut persistence, &display).unwrap(),
        LocationInfo {
            city: String::from("Denpasar"),
            province: String::from("Bali"),
        }
    );
}

#[test]
fn test_every_reference_location_can_be_saved() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");

    for location in all_locations() {
        set_user_location(
            &mut persistence,
            &set_request(location.province_name(), location.city_name()),
            &display,
        )
        .unwrap();
        let saved = get_user_location(&mut persistence, &display).unwrap();
        assert_eq!(saved.city, location.city_name());
        assert_eq!(saved.province, location.province_name());
    }
}

#[test]
fn test_invalid_location_leaves_storage_unchanged() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");
    set_user_location(&mut persistence, &set_request("Bali", "Denpasar"), &display).unwrap();

    let mismatched = set_user_location(
        &mut persistence,
        &set_request("Bali", "Jakarta Pusat"),
        &display,
    );
    assert_eq!(
        mismatched,
        Err(ApiError::InvalidInput {
            field: String::from("city"),
            message: String::from("Invalid city or province"),
        })
    );

    let missing = set_user_location(
        &mut persistence,
        &SetLocationRequest {
            city: Some(String::from("Denpasar")),
            province: None,
        },
        &display,
    );
    assert!(matches!(missing, Err(ApiError::InvalidInput { .. })));

    assert_eq!(
        get_user_location(&mut persistence, &display).unwrap().city,
        "Denpasar"
    );
}

#[test]
fn test_reference_list_shape() {
    let provinces = list_locations();
    let total_cities: usize = provinces.iter().map(|p| p.cities.len()).sum();
    assert_eq!(total_cities, all_locations().count());

    let jakarta = provinces
        .iter()
        .find(|p| p.province == "DKI Jakarta")
        .unwrap();
    assert_eq!(jakarta.timezone, "Asia/Jakarta");
    assert!(jakarta.cities.iter().any(|c| c.name == "Jakarta Pusat"));

    let papua = provinces.iter().find(|p| p.province == "Papua").unwrap();
    assert_eq!(papua.timezone, "Asia/Jayapura");
}

#[test]
fn test_admin_location_listing() {
    let mut persistence = setup();
    let display = create_display_user(&mut persistence, "lobby");
    set_user_location(&mut persistence, &set_request("Bali", "Denpasar"), &display).unwrap();

    let all = list_user_locations(&mut persistence, &admin()).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].user_id, display.id);

    let one = get_saved_user_location(&mut persistence, &display.id, &admin()).unwrap();
    assert_eq!(one.city, "Denpasar");

    assert!(matches!(
        get_saved_user_location(&mut persistence, "admin-1", &admin()),
        Err(ApiError::ResourceNotFound { .. })
    ));
    assert!(matches!(
        list_user_locations(&mut persistence, &display),
        Err(ApiError::Unauthorized { .. })
    ));
}
