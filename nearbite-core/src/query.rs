//! Filtering and ordering of annotated restaurants.
//!
//! Both operations are pure. Filtering preserves relative order and sorting
//! is stable, so the two compose in either order with the same result.

use std::str::FromStr;

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Restaurant;
use crate::estimate::HIGH_VOLUME_THRESHOLD;

/// Longest wait, in minutes, that still counts as quick.
pub const QUICK_WAIT_MINUTES: u32 = 15;

/// Named predicates over a restaurant list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum RestaurantFilter {
    /// Keep everything.
    #[default]
    All,
    /// Keep restaurants within a mile of the primary landmark.
    NearPrimary,
    /// Keep restaurants with a wait of at most [`QUICK_WAIT_MINUTES`].
    Quick,
    /// Keep restaurants whose volume score is above 70.
    HighVolume,
}

impl RestaurantFilter {
    /// Parse a filter name, falling back to [`RestaurantFilter::All`] for
    /// anything unrecognised.
    ///
    /// # Examples
    /// ```
    /// use nearbite_core::RestaurantFilter;
    ///
    /// assert_eq!(RestaurantFilter::parse_lenient("quick"), RestaurantFilter::Quick);
    /// assert_eq!(RestaurantFilter::parse_lenient("pentagon"), RestaurantFilter::NearPrimary);
    /// assert_eq!(RestaurantFilter::parse_lenient("spicy"), RestaurantFilter::All);
    /// ```
    #[must_use]
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!("unknown filter '{name}'; showing all restaurants");
            Self::All
        })
    }

    /// Canonical filter name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::NearPrimary => "nearPrimary",
            Self::Quick => "quick",
            Self::HighVolume => "highVolume",
        }
    }

    /// Whether `restaurant` passes this filter.
    #[must_use]
    pub fn matches(self, restaurant: &Restaurant) -> bool {
        match self {
            Self::All => true,
            Self::NearPrimary => restaurant.near_primary,
            Self::Quick => restaurant.wait_time_minutes <= QUICK_WAIT_MINUTES,
            Self::HighVolume => restaurant.volume_score.get() > HIGH_VOLUME_THRESHOLD,
        }
    }
}

impl FromStr for RestaurantFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "nearPrimary" | "near-primary" | "pentagon" => Ok(Self::NearPrimary),
            "quick" => Ok(Self::Quick),
            "highVolume" | "high-volume" | "high" => Ok(Self::HighVolume),
            _ => Err(format!("unknown filter '{s}'")),
        }
    }
}

impl std::fmt::Display for RestaurantFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep the restaurants that pass `predicate`, in their original order.
#[must_use]
pub fn filter(restaurants: &[Restaurant], predicate: RestaurantFilter) -> Vec<Restaurant> {
    let kept: Vec<Restaurant> = restaurants
        .iter()
        .filter(|r| predicate.matches(r))
        .cloned()
        .collect();
    debug!(
        "filter {predicate} kept {} of {} restaurants",
        kept.len(),
        restaurants.len()
    );
    kept
}

/// Order restaurants by ascending distance.
///
/// The sort is stable: restaurants at equal (rounded) distances keep their
/// relative order.
#[must_use]
pub fn sort_by_distance(mut restaurants: Vec<Restaurant>) -> Vec<Restaurant> {
    restaurants.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    restaurants
}

/// Filter, then sort by distance.
#[must_use]
pub fn filter_and_sort(restaurants: &[Restaurant], predicate: RestaurantFilter) -> Vec<Restaurant> {
    sort_by_distance(filter(restaurants, predicate))
}
