//! Test doubles and fixture builders shared by unit, behaviour and
//! downstream crate tests.
//!
//! Nothing here performs I/O. The stubs return pre-configured responses so
//! tests can drive [`crate::Discovery`] without a live search service.

use std::cell::Cell;

use chrono::NaiveDate;
use geo::Coord;

use crate::geodesic::lat_lng;
use crate::landmark::PRIMARY_PROXIMITY_MILES;
use crate::restaurant::FALLBACK_CUISINE;
use crate::{
    GeocodeError, Geocoder, PlaceSearch, PlaceSearchError, RawPlace, Restaurant,
    VolumeHistorySource, VolumeSample, VolumeScore, wait_time_minutes,
};

/// Miles per degree of latitude at the Pentagon's latitude.
const MILES_PER_DEGREE_LATITUDE: f64 = 69.094;

/// Build a restaurant due north of the Pentagon, `distance_miles` away.
///
/// Derived fields follow the same rules as the catalogue builder, so the
/// result is indistinguishable from a built restaurant at that distance.
#[expect(clippy::float_arithmetic, reason = "offset the latitude by a distance")]
#[must_use]
pub fn restaurant_at(id: &str, distance_miles: f64, score: VolumeScore) -> Restaurant {
    Restaurant {
        id: id.to_owned(),
        name: format!("Restaurant {id}"),
        location: lat_lng(
            38.8719 + distance_miles / MILES_PER_DEGREE_LATITUDE,
            -77.0563,
        ),
        distance_miles,
        wait_time_minutes: wait_time_minutes(score, distance_miles),
        volume_score: score,
        volume_tier: score.tier(),
        cuisine: FALLBACK_CUISINE.to_owned(),
        address: String::new(),
        near_primary: distance_miles <= PRIMARY_PROXIMITY_MILES,
        photo_url: None,
    }
}

#[derive(Debug, Clone)]
enum StubResponse<T, E> {
    Value(T),
    Error(E),
}

impl<T: Clone, E: Clone> StubResponse<T, E> {
    fn get(&self) -> Result<T, E> {
        match self {
            Self::Value(value) => Ok(value.clone()),
            Self::Error(error) => Err(error.clone()),
        }
    }
}

/// Stub [`PlaceSearch`] returning a fixed response.
///
/// The most recent request is recorded for inspection.
///
/// # Examples
/// ```
/// use nearbite_core::test_support::StubPlaceSearch;
/// use nearbite_core::{PlaceSearch, RawPlace};
/// use nearbite_core::geodesic::lat_lng;
///
/// let centre = lat_lng(38.87, -77.05);
/// let search = StubPlaceSearch::with_places(vec![RawPlace::new("a", "Diner", centre)]);
/// assert_eq!(search.search_nearby(centre, 500).map(|p| p.len()), Ok(1));
/// assert_eq!(search.last_request(), Some((centre, 500)));
/// ```
#[derive(Debug, Clone)]
pub struct StubPlaceSearch {
    response: StubResponse<Vec<RawPlace>, PlaceSearchError>,
    last_request: Cell<Option<(Coord<f64>, u32)>>,
}

impl StubPlaceSearch {
    /// Create a search that always returns `places`.
    #[must_use]
    pub fn with_places(places: Vec<RawPlace>) -> Self {
        Self {
            response: StubResponse::Value(places),
            last_request: Cell::new(None),
        }
    }

    /// Create a search that always fails with `error`.
    #[must_use]
    pub fn with_error(error: PlaceSearchError) -> Self {
        Self {
            response: StubResponse::Error(error),
            last_request: Cell::new(None),
        }
    }

    /// Centre and radius of the most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<(Coord<f64>, u32)> {
        self.last_request.get()
    }
}

impl PlaceSearch for StubPlaceSearch {
    fn search_nearby(
        &self,
        centre: Coord<f64>,
        radius_meters: u32,
    ) -> Result<Vec<RawPlace>, PlaceSearchError> {
        self.last_request.set(Some((centre, radius_meters)));
        self.response.get()
    }
}

/// Stub [`Geocoder`] returning a fixed coordinate or error.
///
/// Blank addresses are rejected with [`GeocodeError::EmptyAddress`] before
/// the configured response is consulted, mirroring the real adapter.
#[derive(Debug, Clone)]
pub struct StubGeocoder {
    response: StubResponse<Coord<f64>, GeocodeError>,
}

impl StubGeocoder {
    /// Create a geocoder that resolves every address to `coord`.
    #[must_use]
    pub fn with_coord(coord: Coord<f64>) -> Self {
        Self {
            response: StubResponse::Value(coord),
        }
    }

    /// Create a geocoder that always fails with `error`.
    #[must_use]
    pub fn with_error(error: GeocodeError) -> Self {
        Self {
            response: StubResponse::Error(error),
        }
    }
}

impl Geocoder for StubGeocoder {
    fn geocode(&self, address: &str) -> Result<Coord<f64>, GeocodeError> {
        if address.trim().is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }
        self.response.get()
    }
}

/// [`VolumeHistorySource`] returning the same samples for every query.
#[derive(Debug, Clone, Default)]
pub struct FixedVolumeHistory {
    samples: Vec<VolumeSample>,
}

impl FixedVolumeHistory {
    /// Create a source that always returns `samples`.
    #[must_use]
    pub fn new(samples: Vec<VolumeSample>) -> Self {
        Self { samples }
    }
}

impl VolumeHistorySource for FixedVolumeHistory {
    fn volume_history(&self, _restaurant_id: &str, _day: NaiveDate) -> Vec<VolumeSample> {
        self.samples.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, true)]
    #[case(1.0, true)]
    #[case(1.1, false)]
    fn restaurant_at_badges_by_distance(#[case] distance: f64, #[case] near: bool) {
        let restaurant = restaurant_at("x", distance, VolumeScore::from(50));
        assert_eq!(restaurant.near_primary, near);
    }

    #[rstest]
    fn restaurant_at_lands_at_requested_distance() {
        let restaurant = restaurant_at("x", 3.2, VolumeScore::from(50));
        let pentagon = lat_lng(38.8719, -77.0563);
        assert_eq!(
            crate::geodesic::distance_miles(pentagon, restaurant.location),
            3.2
        );
    }

    #[rstest]
    fn stub_geocoder_rejects_blank_address() {
        let geocoder = StubGeocoder::with_coord(lat_lng(1.0, 2.0));
        assert_eq!(geocoder.geocode("   "), Err(GeocodeError::EmptyAddress));
        assert_eq!(geocoder.geocode("Main St"), Ok(lat_lng(1.0, 2.0)));
    }

    #[rstest]
    fn stub_search_returns_configured_error() {
        let error = PlaceSearchError::Parse {
            message: "truncated".into(),
        };
        let search = StubPlaceSearch::with_error(error.clone());
        assert_eq!(search.search_nearby(lat_lng(0.0, 0.0), 10), Err(error));
    }
}
