//! Turn raw place records into annotated [`Restaurant`] values.

use geo::Coord;
use log::{debug, warn};

use crate::geodesic::distance_miles;
use crate::restaurant::FALLBACK_CUISINE;
use crate::{LandmarkIndex, RawPlace, Restaurant, VolumeScore, wait_time_minutes};

/// Annotates search results against a reference coordinate.
///
/// The builder performs no I/O. Output order matches input order; sorting
/// belongs to [`crate::query`].
///
/// # Examples
/// ```
/// use nearbite_core::{CatalogBuilder, LandmarkIndex, RawPlace, VolumeTier};
/// use nearbite_core::geodesic::lat_lng;
///
/// let reference = lat_lng(38.8719, -77.0563);
/// let place = RawPlace::new("a", "Diner", lat_lng(38.8835, -77.0563)).with_popularity(85);
/// let restaurants = CatalogBuilder::new(LandmarkIndex::washington_dc()).build([place], reference);
///
/// assert_eq!(restaurants[0].distance_miles, 0.8);
/// assert_eq!(restaurants[0].volume_tier, VolumeTier::High);
/// assert_eq!(restaurants[0].wait_time_minutes, 15);
/// assert!(restaurants[0].near_primary);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CatalogBuilder<'a> {
    landmarks: &'a LandmarkIndex,
}

impl<'a> CatalogBuilder<'a> {
    /// Create a builder that badges proximity against `landmarks`.
    #[must_use]
    pub const fn new(landmarks: &'a LandmarkIndex) -> Self {
        Self { landmarks }
    }

    /// Annotate every place relative to `reference`.
    ///
    /// An empty input produces an empty output.
    pub fn build<I>(&self, places: I, reference: Coord<f64>) -> Vec<Restaurant>
    where
        I: IntoIterator<Item = RawPlace>,
    {
        let restaurants: Vec<Restaurant> = places
            .into_iter()
            .map(|place| self.annotate(place, reference))
            .collect();
        debug!("annotated {} places into restaurants", restaurants.len());
        restaurants
    }

    /// Annotate a single place relative to `reference`.
    #[must_use]
    pub fn annotate(&self, place: RawPlace, reference: Coord<f64>) -> Restaurant {
        let RawPlace {
            id,
            name,
            location,
            popularity,
            categories,
            vicinity,
            photo_url,
        } = place;

        let distance = distance_miles(reference, location);
        let volume_score = VolumeScore::from_signal(popularity);
        let cuisine = categories.into_iter().next().unwrap_or_else(|| {
            warn!("place {id} has no category tags; using '{FALLBACK_CUISINE}'");
            FALLBACK_CUISINE.to_owned()
        });
        let address = vicinity.unwrap_or_else(|| {
            warn!("place {id} has no vicinity; leaving address blank");
            String::new()
        });

        Restaurant {
            near_primary: self.landmarks.is_near_primary(location),
            wait_time_minutes: wait_time_minutes(volume_score, distance),
            volume_tier: volume_score.tier(),
            distance_miles: distance,
            volume_score,
            id,
            name,
            location,
            cuisine,
            address,
            photo_url,
        }
    }
}
