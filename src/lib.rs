//! Facade crate for the Nearbite restaurant discovery engine.
//!
//! This crate re-exports the core domain types and exposes the Google Maps
//! adapters behind the `http` feature.

#![forbid(unsafe_code)]

pub use nearbite_core::{
    CatalogBuilder, Discovery, GeocodeError, Geocoder, Landmark, LandmarkCategory, LandmarkIndex,
    LandmarkIndexError, LandmarkRegistry, MapMarker, MarkerColour, NearbyLocation,
    NearbyLocationSource, PlaceSearch, PlaceSearchError, RawPlace, Restaurant, RestaurantFilter,
    SyntheticVolumeHistory, VolumeHistorySource, VolumeSample, VolumeScore, VolumeTier,
    derive_markers, detail_markers, wait_time_minutes,
};
pub use nearbite_core::{geodesic, history, query};

#[cfg(feature = "http")]
pub use nearbite_data::google::{
    GoogleMapsProvider, GooglePlacesConfig, ProviderBuildError, StaticMapView,
};
