//! Annotated restaurant records.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{VolumeScore, VolumeTier};

/// Cuisine assigned when a place carries no category tags.
pub const FALLBACK_CUISINE: &str = "restaurant";

/// A restaurant annotated for one discovery query.
///
/// Values are computed once by [`crate::CatalogBuilder`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Restaurant {
    /// Upstream identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Distance from the query reference in miles, rounded to one decimal.
    pub distance_miles: f64,
    /// Estimated wait in whole minutes.
    pub wait_time_minutes: u32,
    /// Volume score in `0..=100`.
    pub volume_score: VolumeScore,
    /// Tier derived from `volume_score`.
    pub volume_tier: VolumeTier,
    /// Primary cuisine tag.
    pub cuisine: String,
    /// Address or vicinity text.
    pub address: String,
    /// Whether the restaurant lies within a mile of the primary landmark.
    pub near_primary: bool,
    /// Optional photo URL.
    pub photo_url: Option<String>,
}
