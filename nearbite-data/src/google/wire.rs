//! Google Maps web service response types.
//!
//! Only the fields the adapters read are modelled; everything else in the
//! payload is ignored.
//!
//! See: <https://developers.google.com/maps/documentation/places/web-service/search-nearby>
//! and <https://developers.google.com/maps/documentation/geocoding/requests-geocoding>

use geo::Coord;
use serde::Deserialize;

/// Payload status for a successful request with results.
pub const STATUS_OK: &str = "OK";

/// Payload status for a successful request without results.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Places Nearby Search response.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    /// Request status, e.g. `OK`, `ZERO_RESULTS` or `REQUEST_DENIED`.
    pub status: String,
    /// Human-readable detail accompanying a failure status.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Matching places.
    #[serde(default)]
    pub results: Vec<PlaceResult>,
}

/// A single place in a Nearby Search response.
#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    /// Stable place identifier.
    pub place_id: String,
    /// Display name.
    pub name: String,
    /// Position.
    pub geometry: Geometry,
    /// Total number of user ratings.
    #[serde(default)]
    pub user_ratings_total: Option<u64>,
    /// Place types, most specific first.
    #[serde(default)]
    pub types: Vec<String>,
    /// Simplified address.
    #[serde(default)]
    pub vicinity: Option<String>,
    /// Photo references.
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// Geometry wrapper shared by both APIs.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    /// Point location.
    pub location: LatLng,
}

/// Latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

/// Reference to a place photo.
#[derive(Debug, Deserialize)]
pub struct Photo {
    /// Opaque reference passed to the Places Photo API.
    pub photo_reference: String,
}

/// Geocoding API response.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    /// Request status, e.g. `OK` or `ZERO_RESULTS`.
    pub status: String,
    /// Human-readable detail accompanying a failure status.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Candidate matches, best first.
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

/// A single geocoding match.
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    /// Position of the match.
    pub geometry: Geometry,
}
