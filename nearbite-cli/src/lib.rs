//! Command-line interface for Nearbite restaurant discovery.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;

mod discover;
mod error;
mod history;
mod inputs;
mod nearby;

pub use error::CliError;

use discover::DiscoverArgs;
use history::HistoryArgs;
use nearby::NearbyArgs;

pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LNG: &str = "lng";
pub(crate) const ARG_ADDRESS: &str = "address";
pub(crate) const ARG_RADIUS_METERS: &str = "radius-meters";
pub(crate) const ARG_RADIUS_MILES: &str = "radius-miles";
pub(crate) const ARG_FILTER: &str = "filter";
pub(crate) const ARG_API_KEY: &str = "api-key";
pub(crate) const ARG_PLACES_BASE_URL: &str = "places-base-url";
pub(crate) const ARG_LANDMARKS: &str = "landmarks";
pub(crate) const ARG_RESTAURANT_ID: &str = "restaurant-id";
pub(crate) const ARG_DAY: &str = "day";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ENV_DISCOVER_API_KEY: &str = "NEARBITE_CMDS_DISCOVER_API_KEY";
pub(crate) const ENV_NEARBY_LAT: &str = "NEARBITE_CMDS_NEARBY_LAT";
pub(crate) const ENV_NEARBY_LNG: &str = "NEARBITE_CMDS_NEARBY_LNG";
pub(crate) const ENV_HISTORY_RESTAURANT_ID: &str = "NEARBITE_CMDS_HISTORY_RESTAURANT_ID";

/// Run the Nearbite CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration merging or
/// the selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Discover(args) => discover::run_discover(args),
        Command::Nearby(args) => nearby::run_nearby(args),
        Command::History(args) => history::run_history(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nearbite",
    about = "Find restaurants near a reference point and estimate how busy they are",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search for restaurants and print them with map markers.
    Discover(DiscoverArgs),
    /// List registered landmarks near a coordinate.
    Nearby(NearbyArgs),
    /// Print synthetic hourly volume for a restaurant.
    History(HistoryArgs),
}

/// Serialise `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
