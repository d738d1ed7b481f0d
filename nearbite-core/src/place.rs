//! Raw place records as delivered by a place-search collaborator.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A place returned by an external search, before annotation.
///
/// Only `id`, `name` and `location` are guaranteed. Everything else may be
/// missing and is defaulted by the catalogue builder.
///
/// # Examples
/// ```
/// use nearbite_core::RawPlace;
/// use nearbite_core::geodesic::lat_lng;
///
/// let place = RawPlace::new("abc", "Diner", lat_lng(38.87, -77.05))
///     .with_popularity(120)
///     .with_categories(["cafe", "food"]);
/// assert_eq!(place.popularity, Some(120));
/// assert_eq!(place.categories.first().map(String::as_str), Some("cafe"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawPlace {
    /// Upstream identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Unbounded popularity count, such as the number of ratings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub popularity: Option<u64>,
    /// Category tags, most specific first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: Vec<String>,
    /// Human-readable vicinity or street address.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vicinity: Option<String>,
    /// Photo URL resolved by the search collaborator.
    #[cfg_attr(feature = "serde", serde(default))]
    pub photo_url: Option<String>,
}

impl RawPlace {
    /// Construct a place carrying only the mandatory fields.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            popularity: None,
            categories: Vec::new(),
            vicinity: None,
            photo_url: None,
        }
    }

    /// Attach a popularity count.
    #[must_use]
    pub fn with_popularity(mut self, popularity: u64) -> Self {
        self.popularity = Some(popularity);
        self
    }

    /// Replace the category tags.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a vicinity string.
    #[must_use]
    pub fn with_vicinity(mut self, vicinity: impl Into<String>) -> Self {
        self.vicinity = Some(vicinity.into());
        self
    }

    /// Attach a photo URL.
    #[must_use]
    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }
}
