//! Core domain logic for the Nearbite restaurant discovery engine.
//!
//! Responsibilities:
//! - Annotate raw place records with distance, volume, wait and proximity.
//! - Filter, order and mark up restaurant lists for map display.
//! - Look up nearby landmarks and hourly volume history.
//!
//! Boundaries:
//! - No network or file I/O. Place search and geocoding arrive through the
//!   [`PlaceSearch`] and [`Geocoder`] traits, implemented in `nearbite-data`.
//!
//! Invariants:
//! - Every tier label and tier colour derives from [`VolumeTier::from_score`].
//! - Empty results are values, never errors.

#![forbid(unsafe_code)]

mod catalog;
mod discovery;
mod estimate;
pub mod geodesic;
pub mod history;
mod landmark;
mod marker;
mod place;
pub mod query;
mod restaurant;
mod search;

#[doc(hidden)]
pub mod test_support;

pub use catalog::CatalogBuilder;
pub use discovery::{DETAIL_RADIUS_METERS, Discovery};
pub use estimate::{
    HIGH_VOLUME_THRESHOLD, MEDIUM_VOLUME_THRESHOLD, NEUTRAL_VOLUME_SCORE, VolumeScore, VolumeTier,
    wait_time_minutes,
};
pub use history::{SyntheticVolumeHistory, VolumeHistorySource, VolumeSample};
pub use landmark::{
    Landmark, LandmarkCategory, LandmarkIndex, LandmarkIndexError, LandmarkRegistry,
    NearbyLocation, NearbyLocationSource, PENTAGON, PRIMARY_PROXIMITY_MILES,
};
pub use marker::{MAX_RESTAURANT_MARKERS, MapMarker, MarkerColour, derive_markers, detail_markers};
pub use place::RawPlace;
pub use query::{QUICK_WAIT_MINUTES, RestaurantFilter};
pub use restaurant::{FALLBACK_CUISINE, Restaurant};
pub use search::{
    DEFAULT_SEARCH_RADIUS_METERS, GeocodeError, Geocoder, PlaceSearch, PlaceSearchError,
};
