//! Unit tests for the `nearby` and `history` commands, which need no
//! network access.

use super::*;
use crate::history::{HistoryArgs, HistoryConfig, execute_history, run_history_with};
use crate::nearby::{NearbyArgs, NearbyConfig, execute_nearby, run_nearby_with};
use chrono::NaiveDate;
use nearbite_core::geodesic::{lat_lng, miles_from_meters};
use nearbite_core::{DETAIL_RADIUS_METERS, NearbyLocation};
use rstest::{fixture, rstest};

#[fixture]
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 17).expect("valid date")
}

#[rstest]
#[case(None, Some(-77.0563), ARG_LAT, ENV_NEARBY_LAT)]
#[case(Some(38.8719), None, ARG_LNG, ENV_NEARBY_LNG)]
fn converting_nearby_without_coordinate_errors(
    #[case] lat: Option<f64>,
    #[case] lng: Option<f64>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = NearbyArgs {
        lat,
        lng,
        ..NearbyArgs::default()
    };
    let err = NearbyConfig::try_from(args).expect_err("missing coordinate should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn nearby_radius_defaults_to_two_kilometres() {
    let args = NearbyArgs {
        lat: Some(38.8719),
        lng: Some(-77.0563),
        ..NearbyArgs::default()
    };
    let config = NearbyConfig::try_from(args).expect("config should build");
    assert_eq!(config.radius_miles, miles_from_meters(DETAIL_RADIUS_METERS));
    assert_eq!(config.subject, lat_lng(38.8719, -77.0563));
}

#[rstest]
#[case(-1.0)]
#[case(f64::NAN)]
fn nearby_rejects_invalid_radii(#[case] radius: f64) {
    let args = NearbyArgs {
        lat: Some(38.8719),
        lng: Some(-77.0563),
        radius_miles: Some(radius),
        ..NearbyArgs::default()
    };
    let err = NearbyConfig::try_from(args).expect_err("invalid radius");
    assert!(matches!(err, CliError::InvalidRadius { .. }), "{err:?}");
}

#[rstest]
fn execute_nearby_lists_landmarks_nearest_first() {
    let config = NearbyConfig {
        subject: lat_lng(38.8719, -77.0563),
        radius_miles: miles_from_meters(DETAIL_RADIUS_METERS),
        landmarks: None,
    };

    let nearby = execute_nearby(&config).expect("lookup should succeed");

    let names: Vec<_> = nearby.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["Pentagon", "Pentagon City Mall"]);
}

#[rstest]
fn run_nearby_writes_json_array() {
    let args = NearbyArgs {
        lat: Some(38.8719),
        lng: Some(-77.0563),
        radius_miles: Some(0.0),
        ..NearbyArgs::default()
    };
    let mut stdout = Vec::new();

    run_nearby_with(args, &mut stdout).expect("nearby should succeed");

    let nearby: Vec<NearbyLocation> =
        serde_json::from_slice(&stdout).expect("output should be JSON");
    assert!(nearby.is_empty());
}

#[rstest]
fn converting_history_without_restaurant_errors() {
    let err = HistoryConfig::try_from(HistoryArgs::default()).expect_err("missing id");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RESTAURANT_ID);
            assert_eq!(env, ENV_HISTORY_RESTAURANT_ID);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case("17/05/2024")]
#[case("2024-02-30")]
fn history_rejects_malformed_days(#[case] day: &str) {
    let args = HistoryArgs {
        restaurant_id: Some("abc".to_owned()),
        day: Some(day.to_owned()),
        seed: None,
    };
    let err = HistoryConfig::try_from(args).expect_err("bad day");
    match err {
        CliError::InvalidDay { value, .. } => assert_eq!(value, day),
        other => panic!("expected InvalidDay, found {other:?}"),
    }
}

#[rstest]
fn execute_history_defaults_to_today(today: NaiveDate) {
    let config = HistoryConfig {
        restaurant_id: "abc".to_owned(),
        day: None,
        seed: 7,
    };

    let report = execute_history(config, today);

    assert_eq!(report.day, today);
    assert_eq!(report.samples.len(), 14);
    assert_eq!(
        report.samples.first().map(|s| s.time.as_str()),
        Some("8:00 AM")
    );
    assert_eq!(report.samples.last().map(|s| s.time.as_str()), Some("9:00 PM"));
}

#[rstest]
fn run_history_is_reproducible(today: NaiveDate) {
    let args = HistoryArgs {
        restaurant_id: Some("abc".to_owned()),
        day: Some("2024-05-17".to_owned()),
        seed: Some(7),
    };
    let mut first = Vec::new();
    let mut second = Vec::new();

    run_history_with(args.clone(), today, &mut first).expect("history should succeed");
    run_history_with(args, today, &mut second).expect("history should succeed");

    assert_eq!(first, second);
    let value: serde_json::Value = serde_json::from_slice(&first).expect("JSON output");
    assert_eq!(value["restaurant_id"], "abc");
    assert_eq!(value["day"], "2024-05-17");
    assert_eq!(value["samples"].as_array().map(Vec::len), Some(14));
}
