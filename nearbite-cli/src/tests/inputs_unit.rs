//! Unit tests for coordinate parsing and landmark loading.

use super::helpers::{PRIMARY_ONLY_REGISTRY, write_file};
use super::*;
use crate::inputs::{coordinate, load_landmarks};
use nearbite_core::geodesic::lat_lng;
use nearbite_core::{LandmarkIndex, LandmarkIndexError};
use rstest::rstest;
use tempfile::TempDir;

#[rstest]
#[case(None, None, None)]
#[case(Some(38.8719), Some(-77.0563), Some(lat_lng(38.8719, -77.0563)))]
#[case(Some(-90.0), Some(180.0), Some(lat_lng(-90.0, 180.0)))]
fn coordinate_accepts_complete_pairs(
    #[case] lat: Option<f64>,
    #[case] lng: Option<f64>,
    #[case] expected: Option<geo::Coord<f64>>,
) {
    assert_eq!(coordinate(lat, lng).expect("valid coordinate"), expected);
}

#[rstest]
#[case(90.5, 0.0)]
#[case(0.0, -180.5)]
#[case(f64::NAN, 0.0)]
fn coordinate_rejects_points_off_the_globe(#[case] lat: f64, #[case] lng: f64) {
    let err = coordinate(Some(lat), Some(lng)).expect_err("out of range");
    assert!(matches!(err, CliError::InvalidCoordinate { .. }), "{err:?}");
}

#[rstest]
fn load_landmarks_defaults_to_washington_dc() {
    let index = load_landmarks(None).expect("built-in registry");
    assert_eq!(&index, LandmarkIndex::washington_dc());
}

#[rstest]
fn load_landmarks_reads_a_registry_file() {
    let tmp = TempDir::new().expect("tempdir");
    let path = write_file(&tmp, "landmarks.json", PRIMARY_ONLY_REGISTRY);

    let index = load_landmarks(Some(&path)).expect("registry should load");

    assert_eq!(index.landmarks().len(), 1);
    assert_eq!(index.primary().map(|l| l.name.as_str()), Some("Home"));
}

#[rstest]
fn load_landmarks_reports_missing_files() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("absent.json");

    let err = load_landmarks(Some(&path)).expect_err("missing file");

    match err {
        CliError::ReadLandmarks { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ReadLandmarks, found {other:?}"),
    }
}

#[rstest]
fn load_landmarks_reports_malformed_json() {
    let tmp = TempDir::new().expect("tempdir");
    let path = write_file(&tmp, "landmarks.json", "{ \"landmarks\": [");

    let err = load_landmarks(Some(&path)).expect_err("malformed file");

    assert!(matches!(err, CliError::ParseLandmarks { .. }), "{err:?}");
}

#[rstest]
fn load_landmarks_reports_unknown_primary() {
    let tmp = TempDir::new().expect("tempdir");
    let path = write_file(
        &tmp,
        "landmarks.json",
        r#"{ "primary": "Nowhere", "landmarks": [] }"#,
    );

    let err = load_landmarks(Some(&path)).expect_err("unknown primary");

    match err {
        CliError::InvalidLandmarks { source, .. } => assert_eq!(
            source,
            LandmarkIndexError::UnknownPrimary {
                name: "Nowhere".to_owned()
            }
        ),
        other => panic!("expected InvalidLandmarks, found {other:?}"),
    }
}
