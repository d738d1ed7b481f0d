//! Data access adapters for the Nearbite engine.
//!
//! Responsibilities:
//! - Implement the core's [`nearbite_core::PlaceSearch`] and
//!   [`nearbite_core::Geocoder`] collaborators over HTTP.
//! - Own the upstream wire formats and turn them into core types.
//!
//! Boundaries:
//! - Do not encode domain rules (live in `nearbite-core`).
//! - Never log or return credentials; URLs in logs and errors are redacted.

#![forbid(unsafe_code)]

pub mod google;
