//! Named reference points used for proximity badges and nearby lookups.
//!
//! A [`LandmarkIndex`] is an immutable registry. The built-in Washington DC
//! table is constructed once per process and shared; callers that need a
//! different metro area build their own index, optionally from a
//! [`LandmarkRegistry`] file.
//!
//! # Examples
//! ```
//! use nearbite_core::LandmarkIndex;
//! use nearbite_core::geodesic::lat_lng;
//!
//! let index = LandmarkIndex::washington_dc();
//! assert!(index.is_near_primary(lat_lng(38.8719, -77.0563)));
//! assert!(index.nearby_to(lat_lng(38.8719, -77.0563), 0.0).is_empty());
//! ```

mod dc;
mod error;

use std::collections::HashSet;
use std::sync::LazyLock;

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geodesic::distance_miles;

pub use dc::PENTAGON;
pub use error::LandmarkIndexError;

/// Distance in miles within which a place counts as near the primary landmark.
pub const PRIMARY_PROXIMITY_MILES: f64 = 1.0;

static WASHINGTON_DC: LazyLock<LandmarkIndex> = LazyLock::new(|| {
    let landmarks = dc::landmarks();
    let primary = landmarks.iter().position(|l| l.name == PENTAGON);
    LandmarkIndex { landmarks, primary }
});

/// Closed set of landmark categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase", from = "String")
)]
pub enum LandmarkCategory {
    /// Government buildings.
    Government,
    /// Malls and shopping districts.
    Shopping,
    /// Rail and bus hubs.
    Transit,
    /// Airports.
    Airport,
}

impl LandmarkCategory {
    /// Map a free-form category tag onto the closed set.
    ///
    /// Unrecognised tags are treated as [`LandmarkCategory::Government`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "shopping" => Self::Shopping,
            "transit" => Self::Transit,
            "airport" => Self::Airport,
            _ => Self::Government,
        }
    }

    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Shopping => "shopping",
            Self::Transit => "transit",
            Self::Airport => "airport",
        }
    }
}

impl From<String> for LandmarkCategory {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl std::fmt::Display for LandmarkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named reference point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Landmark {
    /// Unique name within a registry.
    pub name: String,
    /// Position (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Category used for badges and marker colours.
    pub category: LandmarkCategory,
}

impl Landmark {
    /// Construct a landmark.
    #[must_use]
    pub fn new(name: impl Into<String>, location: Coord<f64>, category: LandmarkCategory) -> Self {
        Self {
            name: name.into(),
            location,
            category,
        }
    }
}

/// A landmark annotated with its distance from a subject coordinate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NearbyLocation {
    /// Landmark name.
    pub name: String,
    /// Distance from the subject in miles, rounded to one decimal.
    pub distance_miles: f64,
    /// Landmark category.
    pub category: LandmarkCategory,
    /// Landmark position.
    pub location: Coord<f64>,
}

/// Source of landmarks near a coordinate.
///
/// [`LandmarkIndex`] answers from its static table; a historical-data
/// service can implement the same trait without touching callers.
pub trait NearbyLocationSource {
    /// Return locations within `radius_miles` of `subject`, nearest first.
    fn nearby(&self, subject: Coord<f64>, radius_miles: f64) -> Vec<NearbyLocation>;
}

/// Immutable registry of landmarks with an optional primary entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LandmarkIndex {
    landmarks: Vec<Landmark>,
    primary: Option<usize>,
}

impl LandmarkIndex {
    /// Build an index without a primary landmark.
    ///
    /// # Errors
    /// Returns [`LandmarkIndexError::DuplicateName`] when two landmarks share
    /// a name.
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self, LandmarkIndexError> {
        let mut seen = HashSet::new();
        if let Some(dup) = landmarks.iter().find(|l| !seen.insert(l.name.as_str())) {
            return Err(LandmarkIndexError::DuplicateName {
                name: dup.name.clone(),
            });
        }
        Ok(Self {
            landmarks,
            primary: None,
        })
    }

    /// Designate the landmark called `name` as the primary landmark.
    ///
    /// # Errors
    /// Returns [`LandmarkIndexError::UnknownPrimary`] when no landmark has
    /// that name.
    pub fn with_primary(mut self, name: &str) -> Result<Self, LandmarkIndexError> {
        let position = self
            .landmarks
            .iter()
            .position(|l| l.name == name)
            .ok_or_else(|| LandmarkIndexError::UnknownPrimary {
                name: name.to_owned(),
            })?;
        self.primary = Some(position);
        Ok(self)
    }

    /// The built-in six-entry Washington DC registry with the Pentagon as
    /// primary.
    #[must_use]
    pub fn washington_dc() -> &'static Self {
        &WASHINGTON_DC
    }

    /// Registered landmarks in declaration order.
    #[must_use]
    pub const fn landmarks(&self) -> &[Landmark] {
        self.landmarks.as_slice()
    }

    /// The primary landmark, if one is designated.
    #[must_use]
    pub fn primary(&self) -> Option<&Landmark> {
        self.primary.and_then(|i| self.landmarks.get(i))
    }

    /// Whether `location` lies within [`PRIMARY_PROXIMITY_MILES`] of the
    /// primary landmark. Always `false` without a primary.
    #[must_use]
    pub fn is_near_primary(&self, location: Coord<f64>) -> bool {
        self.primary()
            .is_some_and(|p| distance_miles(location, p.location) <= PRIMARY_PROXIMITY_MILES)
    }

    /// Landmarks within `radius_miles` of `subject`, nearest first.
    ///
    /// Equal distances keep declaration order. A radius that is zero,
    /// negative or NaN yields an empty list.
    #[must_use]
    pub fn nearby_to(&self, subject: Coord<f64>, radius_miles: f64) -> Vec<NearbyLocation> {
        if radius_miles.is_nan() || radius_miles <= 0.0 {
            return Vec::new();
        }
        let mut nearby: Vec<NearbyLocation> = self
            .landmarks
            .iter()
            .map(|landmark| NearbyLocation {
                name: landmark.name.clone(),
                distance_miles: distance_miles(subject, landmark.location),
                category: landmark.category,
                location: landmark.location,
            })
            .filter(|location| location.distance_miles <= radius_miles)
            .collect();
        nearby.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
        nearby
    }
}

impl NearbyLocationSource for LandmarkIndex {
    fn nearby(&self, subject: Coord<f64>, radius_miles: f64) -> Vec<NearbyLocation> {
        self.nearby_to(subject, radius_miles)
    }
}

impl<T: NearbyLocationSource + ?Sized> NearbyLocationSource for &T {
    fn nearby(&self, subject: Coord<f64>, radius_miles: f64) -> Vec<NearbyLocation> {
        (**self).nearby(subject, radius_miles)
    }
}

/// On-disk description of a landmark registry.
///
/// ```json
/// {
///   "primary": "Pentagon",
///   "landmarks": [
///     { "name": "Pentagon", "location": { "x": -77.0563, "y": 38.8719 }, "category": "government" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LandmarkRegistry {
    /// Name of the primary landmark, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub primary: Option<String>,
    /// Landmarks in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub landmarks: Vec<Landmark>,
}

impl TryFrom<LandmarkRegistry> for LandmarkIndex {
    type Error = LandmarkIndexError;

    fn try_from(registry: LandmarkRegistry) -> Result<Self, Self::Error> {
        let index = Self::new(registry.landmarks)?;
        match registry.primary {
            Some(name) => index.with_primary(&name),
            None => Ok(index),
        }
    }
}
