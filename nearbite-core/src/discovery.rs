//! The entry point offered to presentation layers.
//!
//! [`Discovery`] wires a [`PlaceSearch`] collaborator to the catalogue
//! builder, query engine, landmark index and volume history source. It holds
//! no per-query state: every call takes its inputs and returns fresh values.

use chrono::NaiveDate;
use geo::Coord;
use log::debug;

use crate::geodesic::miles_from_meters;
use crate::query;
use crate::search::DEFAULT_SEARCH_RADIUS_METERS;
use crate::{
    CatalogBuilder, LandmarkIndex, MapMarker, NearbyLocation, NearbyLocationSource, PlaceSearch,
    PlaceSearchError, Restaurant, RestaurantFilter, SyntheticVolumeHistory, VolumeHistorySource,
    VolumeSample, derive_markers, detail_markers,
};

/// Radius of the landmark lookup on the restaurant detail view.
pub const DETAIL_RADIUS_METERS: f64 = 2000.0;

/// Restaurant discovery over pluggable collaborators.
///
/// `S` finds places, `H` supplies volume history and `N` answers nearby
/// lookups. History defaults to [`SyntheticVolumeHistory`] and nearby
/// lookups default to the landmark index itself.
///
/// # Examples
/// ```
/// use nearbite_core::test_support::StubPlaceSearch;
/// use nearbite_core::{Discovery, LandmarkIndex, RawPlace, RestaurantFilter};
/// use nearbite_core::geodesic::lat_lng;
///
/// let search = StubPlaceSearch::with_places(vec![
///     RawPlace::new("a", "Diner", lat_lng(38.8835, -77.0563)).with_popularity(85),
/// ]);
/// let discovery = Discovery::new(search, LandmarkIndex::washington_dc().clone());
/// let reference = discovery.fallback_reference().expect("primary landmark");
///
/// let restaurants = discovery.discover_restaurants(reference)?;
/// let quick = discovery.filter_and_sort(&restaurants, RestaurantFilter::Quick);
/// assert_eq!(quick.len(), 1);
/// assert_eq!(discovery.markers_for(&quick).len(), 2);
/// # Ok::<(), nearbite_core::PlaceSearchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Discovery<S, H = SyntheticVolumeHistory, N = LandmarkIndex> {
    search: S,
    history: H,
    nearby: N,
    landmarks: LandmarkIndex,
    radius_meters: u32,
}

impl<S: PlaceSearch> Discovery<S> {
    /// Create a discovery service using `landmarks` for proximity badges and
    /// nearby lookups, with unseeded synthetic history.
    #[must_use]
    pub fn new(search: S, landmarks: LandmarkIndex) -> Self {
        Self {
            search,
            history: SyntheticVolumeHistory::default(),
            nearby: landmarks.clone(),
            landmarks,
            radius_meters: DEFAULT_SEARCH_RADIUS_METERS,
        }
    }
}

impl<S, H, N> Discovery<S, H, N>
where
    S: PlaceSearch,
    H: VolumeHistorySource,
    N: NearbyLocationSource,
{
    /// Replace the volume history source.
    #[must_use]
    pub fn with_history<H2: VolumeHistorySource>(self, history: H2) -> Discovery<S, H2, N> {
        Discovery {
            search: self.search,
            history,
            nearby: self.nearby,
            landmarks: self.landmarks,
            radius_meters: self.radius_meters,
        }
    }

    /// Replace the nearby-location source. Proximity badges still use the
    /// landmark index.
    #[must_use]
    pub fn with_nearby_source<N2: NearbyLocationSource>(self, nearby: N2) -> Discovery<S, H, N2> {
        Discovery {
            search: self.search,
            history: self.history,
            nearby,
            landmarks: self.landmarks,
            radius_meters: self.radius_meters,
        }
    }

    /// Set the place search radius in metres.
    #[must_use]
    pub fn with_search_radius(mut self, radius_meters: u32) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    /// The landmark index used for proximity badges and markers.
    #[must_use]
    pub const fn landmarks(&self) -> &LandmarkIndex {
        &self.landmarks
    }

    /// The place search radius in metres.
    #[must_use]
    pub const fn search_radius(&self) -> u32 {
        self.radius_meters
    }

    /// Reference coordinate to use when the caller supplies none: the
    /// primary landmark, if one is designated.
    #[must_use]
    pub fn fallback_reference(&self) -> Option<Coord<f64>> {
        self.landmarks.primary().map(|landmark| landmark.location)
    }

    /// Search around `reference` and annotate the results.
    ///
    /// The returned list is in search order; use
    /// [`Discovery::filter_and_sort`] to order it.
    ///
    /// # Errors
    /// Returns the search collaborator's error unchanged.
    pub fn discover_restaurants(
        &self,
        reference: Coord<f64>,
    ) -> Result<Vec<Restaurant>, PlaceSearchError> {
        let places = self.search.search_nearby(reference, self.radius_meters)?;
        debug!(
            "place search within {}m returned {} places",
            self.radius_meters,
            places.len()
        );
        Ok(CatalogBuilder::new(&self.landmarks).build(places, reference))
    }

    /// Apply `predicate`, then order by ascending distance.
    #[must_use]
    pub fn filter_and_sort(
        &self,
        restaurants: &[Restaurant],
        predicate: RestaurantFilter,
    ) -> Vec<Restaurant> {
        query::filter_and_sort(restaurants, predicate)
    }

    /// Home-view markers for an already ordered list.
    #[must_use]
    pub fn markers_for(&self, ordered: &[Restaurant]) -> Vec<MapMarker> {
        derive_markers(ordered, self.landmarks.primary())
    }

    /// Landmarks within `radius_miles` of `coord`, nearest first.
    #[must_use]
    pub fn nearby_landmarks(&self, coord: Coord<f64>, radius_miles: f64) -> Vec<NearbyLocation> {
        self.nearby.nearby(coord, radius_miles)
    }

    /// Detail-view markers: the restaurant plus landmarks within
    /// [`DETAIL_RADIUS_METERS`].
    #[must_use]
    pub fn detail_markers_for(&self, restaurant: &Restaurant) -> Vec<MapMarker> {
        let nearby = self.nearby_landmarks(
            restaurant.location,
            miles_from_meters(DETAIL_RADIUS_METERS),
        );
        detail_markers(restaurant, &nearby)
    }

    /// Hourly volume samples for `restaurant_id` on `day`.
    #[must_use]
    pub fn volume_history_for(&self, restaurant_id: &str, day: NaiveDate) -> Vec<VolumeSample> {
        self.history.volume_history(restaurant_id, day)
    }
}
