//! Input helpers shared by the subcommands.

use std::fs;
use std::path::Path;

use geo::Coord;
use log::debug;
use nearbite_core::geodesic::lat_lng;
use nearbite_core::{LandmarkIndex, LandmarkRegistry};

use crate::{ARG_LAT, ARG_LNG, CliError};

/// Combine optional latitude and longitude flags into a coordinate.
///
/// Both or neither must be present; values must lie on the globe.
pub(crate) fn coordinate(
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<Option<Coord<f64>>, CliError> {
    match (lat, lng) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(CliError::IncompleteCoordinate {
            present: ARG_LAT,
            missing: ARG_LNG,
        }),
        (None, Some(_)) => Err(CliError::IncompleteCoordinate {
            present: ARG_LNG,
            missing: ARG_LAT,
        }),
        (Some(latitude), Some(longitude)) => checked_coordinate(latitude, longitude).map(Some),
    }
}

/// Validate a latitude and longitude pair in degrees.
pub(crate) fn checked_coordinate(lat: f64, lng: f64) -> Result<Coord<f64>, CliError> {
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
        Ok(lat_lng(lat, lng))
    } else {
        Err(CliError::InvalidCoordinate { lat, lng })
    }
}

/// Load a landmark registry file, or the built-in registry when `file` is
/// `None`.
pub(crate) fn load_landmarks(file: Option<&Path>) -> Result<LandmarkIndex, CliError> {
    let Some(path) = file else {
        return Ok(LandmarkIndex::washington_dc().clone());
    };
    let contents = fs::read_to_string(path).map_err(|source| CliError::ReadLandmarks {
        path: path.to_path_buf(),
        source,
    })?;
    let registry: LandmarkRegistry =
        serde_json::from_str(&contents).map_err(|source| CliError::ParseLandmarks {
            path: path.to_path_buf(),
            source,
        })?;
    let index = LandmarkIndex::try_from(registry).map_err(|source| CliError::InvalidLandmarks {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "loaded {} landmarks from {}",
        index.landmarks().len(),
        path.display()
    );
    Ok(index)
}
