//! Test doubles and fixtures shared by the CLI tests.

use std::fs;
use std::path::PathBuf;

use geo::Coord;
use nearbite_core::test_support::{StubGeocoder, StubPlaceSearch};
use nearbite_core::{GeocodeError, Geocoder, PlaceSearch, PlaceSearchError, RawPlace};
use tempfile::TempDir;

use crate::discover::{DiscoverBackend, DiscoverBackendBuilder, DiscoverConfig};
use crate::CliError;

pub(super) const API_KEY: &str = "test-key";

/// Registry with a single primary landmark at the Pentagon.
pub(super) const PRIMARY_ONLY_REGISTRY: &str = r#"{
    "primary": "Home",
    "landmarks": [
        { "name": "Home", "location": { "x": -77.0563, "y": 38.8719 }, "category": "government" }
    ]
}"#;

/// Registry without a primary landmark.
pub(super) const NO_PRIMARY_REGISTRY: &str = r#"{
    "landmarks": [
        { "name": "Depot", "location": { "x": -77.0074, "y": 38.8977 }, "category": "transit" }
    ]
}"#;

/// Maps backend assembled from the core stubs.
#[derive(Debug)]
pub(super) struct StubBackend {
    pub(super) search: StubPlaceSearch,
    pub(super) geocoder: StubGeocoder,
}

impl StubBackend {
    pub(super) fn with_places(places: Vec<RawPlace>) -> Self {
        Self {
            search: StubPlaceSearch::with_places(places),
            geocoder: StubGeocoder::with_error(GeocodeError::NoMatch {
                address: "anywhere".to_owned(),
            }),
        }
    }

    pub(super) fn with_search_error(error: PlaceSearchError) -> Self {
        Self {
            search: StubPlaceSearch::with_error(error),
            ..Self::with_places(Vec::new())
        }
    }

    pub(super) fn geocoding_to(mut self, coord: Coord<f64>) -> Self {
        self.geocoder = StubGeocoder::with_coord(coord);
        self
    }
}

impl PlaceSearch for StubBackend {
    fn search_nearby(
        &self,
        centre: Coord<f64>,
        radius_meters: u32,
    ) -> Result<Vec<RawPlace>, PlaceSearchError> {
        self.search.search_nearby(centre, radius_meters)
    }
}

impl Geocoder for StubBackend {
    fn geocode(&self, address: &str) -> Result<Coord<f64>, GeocodeError> {
        self.geocoder.geocode(address)
    }
}

impl DiscoverBackend for StubBackend {
    fn map_url(&self, centre: Coord<f64>) -> String {
        format!("stub://map?center={},{}", centre.y, centre.x)
    }
}

/// Hands out borrowed access to one [`StubBackend`] so tests can inspect
/// it after the command ran.
#[derive(Debug)]
pub(super) struct StubBackendBuilder {
    pub(super) backend: StubBackend,
}

impl DiscoverBackendBuilder for StubBackendBuilder {
    fn build(&self, _config: &DiscoverConfig) -> Result<Box<dyn DiscoverBackend + '_>, CliError> {
        Ok(Box::new(&self.backend))
    }
}

/// Write `contents` to `name` inside `dir`.
pub(super) fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write test file");
    path
}
