//! Collaborator traits for place search and geocoding.

use geo::Coord;

use super::error::{GeocodeError, PlaceSearchError};
use crate::RawPlace;

/// Search radius used when the caller does not choose one.
pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 5000;

/// Find restaurants around a coordinate.
///
/// Implementations are synchronous so the core stays embeddable in
/// synchronous callers; HTTP adapters block on their own runtime.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use nearbite_core::{PlaceSearch, PlaceSearchError, RawPlace};
///
/// struct OnePlace;
///
/// impl PlaceSearch for OnePlace {
///     fn search_nearby(
///         &self,
///         centre: Coord<f64>,
///         _radius_meters: u32,
///     ) -> Result<Vec<RawPlace>, PlaceSearchError> {
///         Ok(vec![RawPlace::new("1", "Diner", centre)])
///     }
/// }
///
/// let places = OnePlace.search_nearby(Coord { x: 0.0, y: 0.0 }, 500)?;
/// assert_eq!(places.len(), 1);
/// # Ok::<(), PlaceSearchError>(())
/// ```
pub trait PlaceSearch {
    /// Return places within `radius_meters` of `centre`.
    ///
    /// An empty result set is `Ok(vec![])`.
    fn search_nearby(
        &self,
        centre: Coord<f64>,
        radius_meters: u32,
    ) -> Result<Vec<RawPlace>, PlaceSearchError>;
}

impl<T: PlaceSearch + ?Sized> PlaceSearch for &T {
    fn search_nearby(
        &self,
        centre: Coord<f64>,
        radius_meters: u32,
    ) -> Result<Vec<RawPlace>, PlaceSearchError> {
        (**self).search_nearby(centre, radius_meters)
    }
}

impl<T: PlaceSearch + ?Sized> PlaceSearch for Box<T> {
    fn search_nearby(
        &self,
        centre: Coord<f64>,
        radius_meters: u32,
    ) -> Result<Vec<RawPlace>, PlaceSearchError> {
        (**self).search_nearby(centre, radius_meters)
    }
}

/// Resolve a free-form address to a coordinate.
pub trait Geocoder {
    /// Return the best match for `address`.
    ///
    /// Implementations must return [`GeocodeError::EmptyAddress`] for blank
    /// input and [`GeocodeError::NoMatch`] when nothing matches.
    fn geocode(&self, address: &str) -> Result<Coord<f64>, GeocodeError>;
}

impl<T: Geocoder + ?Sized> Geocoder for &T {
    fn geocode(&self, address: &str) -> Result<Coord<f64>, GeocodeError> {
        (**self).geocode(address)
    }
}

impl<T: Geocoder + ?Sized> Geocoder for Box<T> {
    fn geocode(&self, address: &str) -> Result<Coord<f64>, GeocodeError> {
        (**self).geocode(address)
    }
}
