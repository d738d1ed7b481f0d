//! History command: synthetic hourly volume for one restaurant and day.

use chrono::{Local, NaiveDate};
use clap::Parser;
use nearbite_core::{SyntheticVolumeHistory, VolumeHistorySource, VolumeSample};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{ARG_DAY, ARG_RESTAURANT_ID, ARG_SEED, CliError, ENV_HISTORY_RESTAURANT_ID, write_json};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// CLI arguments for the `history` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print fourteen hourly volume samples (8 AM to 9 PM) for a \
                 restaurant. Samples are synthetic but reproducible for the \
                 same restaurant, day and seed.",
    about = "Show hourly volume for a restaurant"
)]
#[ortho_config(prefix = "NEARBITE")]
pub(crate) struct HistoryArgs {
    /// Restaurant identifier as reported by `discover`.
    #[arg(long = ARG_RESTAURANT_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) restaurant_id: Option<String>,
    /// Day to synthesise, as YYYY-MM-DD (default today).
    #[arg(long = ARG_DAY, value_name = "date")]
    #[serde(default)]
    pub(crate) day: Option<String>,
    /// Base seed for the synthesiser (default 0).
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl HistoryArgs {
    fn into_config(self) -> Result<HistoryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        HistoryConfig::try_from(merged)
    }
}

/// Resolved `history` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HistoryConfig {
    pub(crate) restaurant_id: String,
    /// `None` means the current local day.
    pub(crate) day: Option<NaiveDate>,
    pub(crate) seed: u64,
}

impl TryFrom<HistoryArgs> for HistoryConfig {
    type Error = CliError;

    fn try_from(args: HistoryArgs) -> Result<Self, Self::Error> {
        let restaurant_id = args.restaurant_id.ok_or(CliError::MissingArgument {
            field: ARG_RESTAURANT_ID,
            env: ENV_HISTORY_RESTAURANT_ID,
        })?;
        let day = args
            .day
            .map(|value| {
                NaiveDate::parse_from_str(&value, DAY_FORMAT)
                    .map_err(|source| CliError::InvalidDay { value, source })
            })
            .transpose()?;
        Ok(Self {
            restaurant_id,
            day,
            seed: args.seed.unwrap_or_default(),
        })
    }
}

/// JSON document printed by `history`.
#[derive(Debug, Serialize)]
pub(crate) struct HistoryReport {
    pub(crate) restaurant_id: String,
    pub(crate) day: NaiveDate,
    pub(crate) samples: Vec<VolumeSample>,
}

pub(super) fn run_history(args: HistoryArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_history_with(args, Local::now().date_naive(), &mut stdout)
}

pub(super) fn run_history_with(
    args: HistoryArgs,
    today: NaiveDate,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    write_json(writer, &execute_history(config, today))
}

pub(super) fn execute_history(config: HistoryConfig, today: NaiveDate) -> HistoryReport {
    let day = config.day.unwrap_or(today);
    let samples =
        SyntheticVolumeHistory::new(config.seed).volume_history(&config.restaurant_id, day);
    HistoryReport {
        restaurant_id: config.restaurant_id,
        day,
        samples,
    }
}
