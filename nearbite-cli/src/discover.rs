//! Discover command implementation for the Nearbite CLI.

use clap::Parser;
use geo::Coord;
use log::info;
use nearbite_core::{
    DEFAULT_SEARCH_RADIUS_METERS, Discovery, Geocoder, MapMarker, PlaceSearch, Restaurant,
    RestaurantFilter,
};
use nearbite_data::google::{
    DEFAULT_BASE_URL, GoogleMapsProvider, GooglePlacesConfig, StaticMapView,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use crate::inputs::{coordinate, load_landmarks};
use crate::{
    ARG_ADDRESS, ARG_API_KEY, ARG_FILTER, ARG_LANDMARKS, ARG_LAT, ARG_LNG, ARG_PLACES_BASE_URL,
    ARG_RADIUS_METERS, CliError, ENV_DISCOVER_API_KEY, write_json,
};

/// CLI arguments for the `discover` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Search for restaurants around a coordinate, an address or \
                 the primary landmark, annotate them with distance, volume \
                 and wait estimates, and print the filtered list together \
                 with its map markers as JSON.",
    about = "Discover nearby restaurants"
)]
#[ortho_config(prefix = "NEARBITE")]
pub(crate) struct DiscoverArgs {
    /// Reference latitude in degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Reference longitude in degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Street address to geocode into the reference point.
    #[arg(long = ARG_ADDRESS, value_name = "text")]
    #[serde(default)]
    pub(crate) address: Option<String>,
    /// Place search radius in metres (default 5000).
    #[arg(long = ARG_RADIUS_METERS, value_name = "metres")]
    #[serde(default)]
    pub(crate) radius_meters: Option<u32>,
    /// Result filter: all, nearPrimary, quick or highVolume.
    #[arg(long = ARG_FILTER, value_name = "name")]
    #[serde(default)]
    pub(crate) filter: Option<String>,
    /// Google Maps API key.
    #[arg(long = ARG_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    /// Override the Google Maps web service base URL.
    #[arg(long = ARG_PLACES_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) places_base_url: Option<String>,
    /// JSON landmark registry replacing the built-in Washington DC set.
    #[arg(long = ARG_LANDMARKS, value_name = "path")]
    #[serde(default)]
    pub(crate) landmarks: Option<PathBuf>,
}

impl DiscoverArgs {
    pub(crate) fn into_config(self) -> Result<DiscoverConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DiscoverConfig::try_from(merged)
    }
}

/// Where the search is centred.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Reference {
    /// An explicit coordinate.
    Coordinate(Coord<f64>),
    /// An address resolved through the geocoder.
    Address(String),
    /// The registry's primary landmark.
    PrimaryLandmark,
}

/// Resolved `discover` command configuration.
#[derive(Clone, PartialEq)]
pub(crate) struct DiscoverConfig {
    pub(crate) reference: Reference,
    pub(crate) radius_meters: u32,
    pub(crate) filter: RestaurantFilter,
    pub(crate) api_key: String,
    pub(crate) places_base_url: String,
    pub(crate) landmarks: Option<PathBuf>,
}

impl fmt::Debug for DiscoverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoverConfig")
            .field("reference", &self.reference)
            .field("radius_meters", &self.radius_meters)
            .field("filter", &self.filter)
            .field("api_key", &"<redacted>")
            .field("places_base_url", &self.places_base_url)
            .field("landmarks", &self.landmarks)
            .finish()
    }
}

impl TryFrom<DiscoverArgs> for DiscoverConfig {
    type Error = CliError;

    fn try_from(args: DiscoverArgs) -> Result<Self, Self::Error> {
        let api_key = args.api_key.ok_or(CliError::MissingArgument {
            field: ARG_API_KEY,
            env: ENV_DISCOVER_API_KEY,
        })?;
        let reference = match (coordinate(args.lat, args.lng)?, args.address) {
            (Some(_), Some(_)) => return Err(CliError::ConflictingReference),
            (Some(coord), None) => Reference::Coordinate(coord),
            (None, Some(address)) => Reference::Address(address),
            (None, None) => Reference::PrimaryLandmark,
        };
        let filter = args
            .filter
            .as_deref()
            .map_or(RestaurantFilter::All, RestaurantFilter::parse_lenient);

        Ok(Self {
            reference,
            radius_meters: args.radius_meters.unwrap_or(DEFAULT_SEARCH_RADIUS_METERS),
            filter,
            api_key,
            places_base_url: args
                .places_base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            landmarks: args.landmarks,
        })
    }
}

/// Maps services needed by `discover`: place search, geocoding and a
/// static map preview.
pub(super) trait DiscoverBackend: PlaceSearch + Geocoder {
    /// Static map image URL centred on `centre`.
    fn map_url(&self, centre: Coord<f64>) -> String;
}

impl<T: DiscoverBackend + ?Sized> DiscoverBackend for &T {
    fn map_url(&self, centre: Coord<f64>) -> String {
        (**self).map_url(centre)
    }
}

impl DiscoverBackend for GoogleMapsProvider {
    fn map_url(&self, centre: Coord<f64>) -> String {
        self.static_map_url(centre, StaticMapView::default()).into()
    }
}

/// Builds the maps backend for the current discover invocation.
pub(super) trait DiscoverBackendBuilder {
    fn build(&self, config: &DiscoverConfig) -> Result<Box<dyn DiscoverBackend + '_>, CliError>;
}

pub(super) struct DefaultDiscoverBackendBuilder;

impl DiscoverBackendBuilder for DefaultDiscoverBackendBuilder {
    fn build(&self, config: &DiscoverConfig) -> Result<Box<dyn DiscoverBackend + '_>, CliError> {
        let places = GooglePlacesConfig::new(config.api_key.clone())
            .with_base_url(config.places_base_url.clone());
        let provider =
            GoogleMapsProvider::with_config(places).map_err(|source| CliError::BuildProvider {
                base_url: config.places_base_url.clone(),
                source,
            })?;
        Ok(Box::new(provider))
    }
}

/// JSON document printed by `discover`.
#[derive(Debug, Serialize)]
pub(crate) struct DiscoverReport {
    /// Coordinate the search was centred on.
    pub(crate) reference: Coord<f64>,
    /// Filter applied to the results.
    pub(crate) filter: RestaurantFilter,
    /// Filtered restaurants, nearest first.
    pub(crate) restaurants: Vec<Restaurant>,
    /// Primary landmark marker followed by up to five restaurant markers.
    pub(crate) markers: Vec<MapMarker>,
    /// Static map preview of the reference point.
    pub(crate) map_url: String,
}

pub(super) fn run_discover(args: DiscoverArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultDiscoverBackendBuilder;
    run_discover_with(args, &builder, &mut stdout)
}

pub(super) fn run_discover_with(
    args: DiscoverArgs,
    builder: &dyn DiscoverBackendBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_discover(&config, builder)?;
    write_json(writer, &report)
}

pub(super) fn execute_discover(
    config: &DiscoverConfig,
    builder: &dyn DiscoverBackendBuilder,
) -> Result<DiscoverReport, CliError> {
    let landmarks = load_landmarks(config.landmarks.as_deref())?;
    let backend = builder.build(config)?;
    let discovery = Discovery::new(&*backend, landmarks).with_search_radius(config.radius_meters);

    let reference = match &config.reference {
        Reference::Coordinate(coord) => *coord,
        Reference::Address(address) => {
            backend
                .geocode(address)
                .map_err(|source| CliError::Geocode {
                    address: address.clone(),
                    source,
                })?
        }
        Reference::PrimaryLandmark => discovery
            .fallback_reference()
            .ok_or(CliError::NoReference)?,
    };
    info!(
        "discovering restaurants within {}m of ({}, {})",
        config.radius_meters, reference.y, reference.x
    );

    let restaurants = discovery
        .discover_restaurants(reference)
        .map_err(|source| CliError::Search { source })?;
    let ordered = discovery.filter_and_sort(&restaurants, config.filter);
    let markers = discovery.markers_for(&ordered);

    Ok(DiscoverReport {
        reference,
        filter: config.filter,
        restaurants: ordered,
        markers,
        map_url: backend.map_url(reference),
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<DiscoverConfig, CliError> {
    let merged = DiscoverArgs::merge_from_layers(layers).map_err(CliError::from)?;
    DiscoverConfig::try_from(merged)
}
