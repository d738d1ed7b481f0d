//! Built-in Washington DC metro registry.

use crate::geodesic::lat_lng;

use super::{Landmark, LandmarkCategory};

/// Name of the primary landmark in the built-in registry.
pub const PENTAGON: &str = "Pentagon";

const DC_LANDMARKS: [(&str, f64, f64, LandmarkCategory); 6] = [
    (PENTAGON, 38.8719, -77.0563, LandmarkCategory::Government),
    ("Capitol", 38.8899, -77.0091, LandmarkCategory::Government),
    ("White House", 38.8977, -77.0365, LandmarkCategory::Government),
    (
        "Reagan National Airport",
        38.8512,
        -77.0402,
        LandmarkCategory::Airport,
    ),
    ("Union Station", 38.8977, -77.0074, LandmarkCategory::Transit),
    (
        "Pentagon City Mall",
        38.8629,
        -77.0595,
        LandmarkCategory::Shopping,
    ),
];

pub(super) fn landmarks() -> Vec<Landmark> {
    DC_LANDMARKS
        .iter()
        .map(|&(name, lat, lng, category)| Landmark::new(name, lat_lng(lat, lng), category))
        .collect()
}
