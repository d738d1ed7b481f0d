//! Labelled, coloured points for map display.
//!
//! Markers are plain data; projecting them onto a map is left to the
//! presentation layer.

use geo::Coord;
use log::debug;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{Landmark, LandmarkCategory, NearbyLocation, Restaurant};

/// Restaurants beyond this many in a sorted list get no marker.
pub const MAX_RESTAURANT_MARKERS: usize = 5;

/// Label used for the primary landmark marker.
pub const PRIMARY_MARKER_LABEL: &str = "P";

/// Label used for the subject restaurant on the detail view.
pub const RESTAURANT_MARKER_LABEL: &str = "R";

/// A hex RGB colour such as `#FF5722`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct MarkerColour(&'static str);

impl MarkerColour {
    /// Accent colour for the primary landmark.
    pub const PRIMARY_LANDMARK: Self = Self("#FF5722");
    /// Colour of the subject restaurant on the detail view.
    pub const RESTAURANT: Self = Self("#0066CC");
    /// [`crate::VolumeTier::Low`].
    pub const LOW_VOLUME: Self = Self("#4CAF50");
    /// [`crate::VolumeTier::Medium`].
    pub const MEDIUM_VOLUME: Self = Self("#FF9800");
    /// [`crate::VolumeTier::High`].
    pub const HIGH_VOLUME: Self = Self("#F44336");
    /// Government landmarks.
    pub const GOVERNMENT: Self = Self("#F44336");
    /// Shopping landmarks.
    pub const SHOPPING: Self = Self("#4CAF50");
    /// Transit landmarks.
    pub const TRANSIT: Self = Self("#FF9800");
    /// Airport landmarks.
    pub const AIRPORT: Self = Self("#9C27B0");

    /// Return the colour as a hex string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for MarkerColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A labelled point on the map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MapMarker {
    /// Marker position (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Short text drawn on the marker.
    pub label: String,
    /// Fill colour.
    pub colour: MarkerColour,
}

impl MapMarker {
    /// Construct a marker.
    #[must_use]
    pub fn new(location: Coord<f64>, label: impl Into<String>, colour: MarkerColour) -> Self {
        Self {
            location,
            label: label.into(),
            colour,
        }
    }
}

/// Derive the home-view markers for an already filtered and sorted list.
///
/// The primary landmark, when the registry designates one, always comes
/// first. At most [`MAX_RESTAURANT_MARKERS`] restaurants follow, each
/// labelled with its wait time and coloured by its volume tier.
///
/// # Examples
/// ```
/// use nearbite_core::{LandmarkIndex, derive_markers};
///
/// let index = LandmarkIndex::washington_dc();
/// let markers = derive_markers(&[], index.primary());
/// assert_eq!(markers.len(), 1);
/// assert_eq!(markers[0].label, "P");
/// ```
#[must_use]
pub fn derive_markers(restaurants: &[Restaurant], primary: Option<&Landmark>) -> Vec<MapMarker> {
    let primary_marker = primary.map(|landmark| {
        MapMarker::new(
            landmark.location,
            PRIMARY_MARKER_LABEL,
            MarkerColour::PRIMARY_LANDMARK,
        )
    });
    let markers: Vec<MapMarker> = primary_marker
        .into_iter()
        .chain(
            restaurants
                .iter()
                .take(MAX_RESTAURANT_MARKERS)
                .map(restaurant_marker),
        )
        .collect();
    debug!(
        "derived {} map markers from {} restaurants",
        markers.len(),
        restaurants.len()
    );
    markers
}

/// Derive the detail-view markers for `restaurant` and its nearby landmarks.
#[must_use]
pub fn detail_markers(restaurant: &Restaurant, nearby: &[NearbyLocation]) -> Vec<MapMarker> {
    std::iter::once(MapMarker::new(
        restaurant.location,
        RESTAURANT_MARKER_LABEL,
        MarkerColour::RESTAURANT,
    ))
    .chain(nearby.iter().map(|location| {
        let initial = location.name.chars().next().map(String::from);
        MapMarker::new(
            location.location,
            initial.unwrap_or_default(),
            location.category.colour(),
        )
    }))
    .collect()
}

fn restaurant_marker(restaurant: &Restaurant) -> MapMarker {
    MapMarker::new(
        restaurant.location,
        restaurant.wait_time_minutes.to_string(),
        restaurant.volume_tier.colour(),
    )
}

impl LandmarkCategory {
    /// Marker colour for landmarks of this category.
    #[must_use]
    pub const fn colour(self) -> MarkerColour {
        match self {
            Self::Government => MarkerColour::GOVERNMENT,
            Self::Shopping => MarkerColour::SHOPPING,
            Self::Transit => MarkerColour::TRANSIT,
            Self::Airport => MarkerColour::AIRPORT,
        }
    }
}
