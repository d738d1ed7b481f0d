//! Contracts for the place-search and geocoding collaborators.
//!
//! The core never performs network I/O. Adapters such as the HTTP clients in
//! `nearbite-data` implement these traits and report failures through the
//! typed errors here; those errors reach the caller unmodified.

mod error;
mod provider;

pub use error::{GeocodeError, PlaceSearchError};
pub use provider::{DEFAULT_SEARCH_RADIUS_METERS, Geocoder, PlaceSearch};
