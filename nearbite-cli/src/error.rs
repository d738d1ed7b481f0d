//! Error types emitted by the Nearbite CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::path::PathBuf;
use std::sync::Arc;

use nearbite_core::{GeocodeError, LandmarkIndexError, PlaceSearchError};
use nearbite_data::google::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the Nearbite CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// Only one half of a coordinate pair was supplied.
    #[error("--{present} requires --{missing}")]
    IncompleteCoordinate {
        /// The flag that was given.
        present: &'static str,
        /// The flag that was not.
        missing: &'static str,
    },
    /// A coordinate lies outside the valid latitude or longitude range.
    #[error("coordinate ({lat}, {lng}) is out of range")]
    InvalidCoordinate {
        /// Supplied latitude.
        lat: f64,
        /// Supplied longitude.
        lng: f64,
    },
    /// Both a coordinate and an address were supplied.
    #[error("pass either --lat/--lng or --address, not both")]
    ConflictingReference,
    /// No reference was supplied and the landmark registry has no primary.
    #[error("no location given and the landmark registry has no primary landmark")]
    NoReference,
    /// A search radius is negative or not a number.
    #[error("radius {radius} must be a non-negative number of miles")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },
    /// A day argument is not a `YYYY-MM-DD` date.
    #[error("day {value:?} is not a YYYY-MM-DD date: {source}")]
    InvalidDay {
        /// The rejected input.
        value: String,
        /// Parser error.
        #[source]
        source: chrono::ParseError,
    },
    /// Reading the landmark registry file failed.
    #[error("failed to read landmarks at {path:?}: {source}")]
    ReadLandmarks {
        /// Registry file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The landmark registry file is not valid JSON.
    #[error("failed to parse landmarks JSON at {path:?}: {source}")]
    ParseLandmarks {
        /// Registry file path.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The landmark registry is inconsistent.
    #[error("landmarks in {path:?} are invalid: {source}")]
    InvalidLandmarks {
        /// Registry file path.
        path: PathBuf,
        /// Validation error.
        #[source]
        source: LandmarkIndexError,
    },
    /// Constructing the maps provider failed.
    #[error("failed to build maps provider for {base_url:?}: {source}")]
    BuildProvider {
        /// Configured API base URL.
        base_url: String,
        /// Construction error.
        #[source]
        source: ProviderBuildError,
    },
    /// Geocoding the reference address failed.
    #[error("failed to geocode {address:?}: {source}")]
    Geocode {
        /// The address as supplied.
        address: String,
        /// Geocoder error.
        #[source]
        source: GeocodeError,
    },
    /// The place search failed.
    #[error("place search failed: {source}")]
    Search {
        /// Search error.
        source: PlaceSearchError,
    },
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
