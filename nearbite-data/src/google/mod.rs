//! Google Maps Platform adapters.
//!
//! [`GoogleMapsProvider`] implements [`nearbite_core::PlaceSearch`] against
//! the Places Nearby Search API and [`nearbite_core::Geocoder`] against the
//! Geocoding API. It also builds Places Photo and Static Maps URLs for
//! presentation layers.
//!
//! # Architecture
//!
//! The core traits are synchronous. The provider owns a `current_thread`
//! Tokio runtime and blocks on its async HTTP calls, borrowing the caller's
//! runtime instead when invoked from a multi-threaded one.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use nearbite_core::{Geocoder, PlaceSearch};
//! use nearbite_data::google::{GoogleMapsProvider, GooglePlacesConfig};
//!
//! let config = GooglePlacesConfig::new("my-api-key")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let provider = GoogleMapsProvider::with_config(config)?;
//!
//! let centre = provider.geocode("1600 Pennsylvania Ave NW, Washington, DC")?;
//! let places = provider.search_nearby(centre, 2000)?;
//! println!("found {} places", places.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod provider;
mod wire;

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, GooglePlacesConfig, ProviderBuildError, StaticMapView,
};
pub use provider::{GoogleMapsProvider, PHOTO_MAX_WIDTH};
