//! Shared test harness modules for the Nearbite CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod helpers;
mod inputs_unit;
mod offline_unit;
