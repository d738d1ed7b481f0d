//! Nearby command: landmarks around a coordinate.

use clap::Parser;
use geo::Coord;
use nearbite_core::geodesic::miles_from_meters;
use nearbite_core::{DETAIL_RADIUS_METERS, NearbyLocation};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;

use crate::inputs::{checked_coordinate, load_landmarks};
use crate::{
    ARG_LANDMARKS, ARG_LAT, ARG_LNG, ARG_RADIUS_MILES, CliError, ENV_NEARBY_LAT, ENV_NEARBY_LNG,
    write_json,
};

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List registered landmarks within a radius of a coordinate, \
                 nearest first. The radius defaults to the two kilometres \
                 used by the restaurant detail view.",
    about = "List landmarks near a coordinate"
)]
#[ortho_config(prefix = "NEARBITE")]
pub(crate) struct NearbyArgs {
    /// Subject latitude in degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Subject longitude in degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Search radius in miles.
    #[arg(long = ARG_RADIUS_MILES, value_name = "miles")]
    #[serde(default)]
    pub(crate) radius_miles: Option<f64>,
    /// JSON landmark registry replacing the built-in Washington DC set.
    #[arg(long = ARG_LANDMARKS, value_name = "path")]
    #[serde(default)]
    pub(crate) landmarks: Option<PathBuf>,
}

impl NearbyArgs {
    fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved `nearby` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearbyConfig {
    pub(crate) subject: Coord<f64>,
    pub(crate) radius_miles: f64,
    pub(crate) landmarks: Option<PathBuf>,
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let lat = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_LAT,
            env: ENV_NEARBY_LAT,
        })?;
        let lng = args.lng.ok_or(CliError::MissingArgument {
            field: ARG_LNG,
            env: ENV_NEARBY_LNG,
        })?;
        let subject = checked_coordinate(lat, lng)?;
        let radius_miles = args
            .radius_miles
            .unwrap_or_else(|| miles_from_meters(DETAIL_RADIUS_METERS));
        if radius_miles.is_nan() || radius_miles < 0.0 {
            return Err(CliError::InvalidRadius {
                radius: radius_miles,
            });
        }
        Ok(Self {
            subject,
            radius_miles,
            landmarks: args.landmarks,
        })
    }
}

pub(super) fn run_nearby(args: NearbyArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_nearby_with(args, &mut stdout)
}

pub(super) fn run_nearby_with(args: NearbyArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let nearby = execute_nearby(&config)?;
    write_json(writer, &nearby)
}

pub(super) fn execute_nearby(config: &NearbyConfig) -> Result<Vec<NearbyLocation>, CliError> {
    let index = load_landmarks(config.landmarks.as_deref())?;
    Ok(index.nearby_to(config.subject, config.radius_miles))
}
