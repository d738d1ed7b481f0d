//! Volume scoring, tiering and wait-time estimation.
//!
//! [`VolumeTier::from_score`] is the only place the Low/Medium/High cut-offs
//! live. List cards, chart bars and map markers all derive their label and
//! colour from it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::marker::MarkerColour;

/// Score used when a place reports no popularity signal.
pub const NEUTRAL_VOLUME_SCORE: u8 = 50;

/// Upper bound of the volume score range.
pub const MAX_VOLUME_SCORE: u8 = 100;

/// Scores strictly above this value are [`VolumeTier::High`].
pub const HIGH_VOLUME_THRESHOLD: u8 = 70;

/// Scores strictly above this value (and not high) are [`VolumeTier::Medium`].
pub const MEDIUM_VOLUME_THRESHOLD: u8 = 40;

const BASE_WAIT_MINUTES: f64 = 5.0;
const SCORE_POINTS_PER_MINUTE: f64 = 10.0;
const TRAVEL_MINUTES_PER_MILE: f64 = 2.0;
const MAX_TRAVEL_MINUTES: f64 = 10.0;

/// How busy a restaurant is, as an integer in `0..=100`.
///
/// # Examples
/// ```
/// use nearbite_core::{VolumeScore, VolumeTier};
///
/// assert_eq!(VolumeScore::from_signal(Some(850)).get(), 100);
/// assert_eq!(VolumeScore::from_signal(None).get(), 50);
/// assert_eq!(VolumeScore::from_signal(Some(0)).get(), 50);
/// assert_eq!(VolumeScore::from_signal(Some(85)).tier(), VolumeTier::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "u8", into = "u8")
)]
pub struct VolumeScore(u8);

impl VolumeScore {
    /// Derive a score from a raw popularity count.
    ///
    /// A zero count carries no information, so absent and zero signals both
    /// map to [`NEUTRAL_VOLUME_SCORE`]. Counts above [`MAX_VOLUME_SCORE`] are
    /// clamped.
    #[must_use]
    pub fn from_signal(signal: Option<u64>) -> Self {
        signal
            .filter(|count| *count > 0)
            .map_or(Self(NEUTRAL_VOLUME_SCORE), Self::clamped)
    }

    /// Clamp an arbitrary count into the score range.
    #[must_use]
    pub fn clamped(raw: u64) -> Self {
        let bounded = raw.min(u64::from(MAX_VOLUME_SCORE));
        Self(u8::try_from(bounded).unwrap_or(MAX_VOLUME_SCORE))
    }

    /// Return the score as a plain integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Classify the score with the shared tier rule.
    #[must_use]
    pub const fn tier(self) -> VolumeTier {
        VolumeTier::from_score(self)
    }
}

impl Default for VolumeScore {
    fn default() -> Self {
        Self(NEUTRAL_VOLUME_SCORE)
    }
}

impl From<u8> for VolumeScore {
    fn from(value: u8) -> Self {
        Self(value.min(MAX_VOLUME_SCORE))
    }
}

impl From<VolumeScore> for u8 {
    fn from(score: VolumeScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for VolumeScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse Low/Medium/High classification of a [`VolumeScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VolumeTier {
    /// Score of 40 or below.
    Low,
    /// Score above 40 and at most 70.
    Medium,
    /// Score above 70.
    High,
}

impl VolumeTier {
    /// Classify `score`. Both comparisons are strict, so 40 is `Low` and 70
    /// is `Medium`.
    ///
    /// # Examples
    /// ```
    /// use nearbite_core::{VolumeScore, VolumeTier};
    ///
    /// assert_eq!(VolumeTier::from_score(VolumeScore::from(40)), VolumeTier::Low);
    /// assert_eq!(VolumeTier::from_score(VolumeScore::from(70)), VolumeTier::Medium);
    /// assert_eq!(VolumeTier::from_score(VolumeScore::from(71)), VolumeTier::High);
    /// ```
    #[must_use]
    pub const fn from_score(score: VolumeScore) -> Self {
        if score.get() > HIGH_VOLUME_THRESHOLD {
            Self::High
        } else if score.get() > MEDIUM_VOLUME_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Indicator colour for cards, chart bars and map markers.
    #[must_use]
    pub const fn colour(self) -> MarkerColour {
        match self {
            Self::Low => MarkerColour::LOW_VOLUME,
            Self::Medium => MarkerColour::MEDIUM_VOLUME,
            Self::High => MarkerColour::HIGH_VOLUME,
        }
    }
}

impl std::fmt::Display for VolumeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimate the wait in whole minutes for a restaurant.
///
/// The estimate is `5 + score / 10` plus two minutes per mile of travel,
/// with the travel share capped at ten minutes. Negative distances are
/// treated as zero, so the result is always at least five minutes.
///
/// # Examples
/// ```
/// use nearbite_core::{VolumeScore, wait_time_minutes};
///
/// assert_eq!(wait_time_minutes(VolumeScore::from(85), 0.8), 15);
/// assert_eq!(wait_time_minutes(VolumeScore::from(50), 3.2), 16);
/// assert_eq!(wait_time_minutes(VolumeScore::from(100), 40.0), 25);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the estimate is a rounded float bounded to 5..=25 minutes"
)]
#[must_use]
pub fn wait_time_minutes(score: VolumeScore, distance_miles: f64) -> u32 {
    let base = BASE_WAIT_MINUTES + f64::from(score.get()) / SCORE_POINTS_PER_MINUTE;
    let travel = (distance_miles.max(0.0) * TRAVEL_MINUTES_PER_MILE).min(MAX_TRAVEL_MINUTES);
    (base + travel).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 50)]
    #[case(Some(0), 50)]
    #[case(Some(1), 1)]
    #[case(Some(85), 85)]
    #[case(Some(100), 100)]
    #[case(Some(101), 100)]
    #[case(Some(u64::MAX), 100)]
    fn score_from_signal(#[case] signal: Option<u64>, #[case] expected: u8) {
        assert_eq!(VolumeScore::from_signal(signal).get(), expected);
    }

    #[rstest]
    #[case(0, VolumeTier::Low)]
    #[case(40, VolumeTier::Low)]
    #[case(41, VolumeTier::Medium)]
    #[case(70, VolumeTier::Medium)]
    #[case(71, VolumeTier::High)]
    #[case(100, VolumeTier::High)]
    fn tier_boundaries(#[case] score: u8, #[case] expected: VolumeTier) {
        assert_eq!(VolumeScore::from(score).tier(), expected);
    }

    #[rstest]
    fn tier_colours_follow_tier() {
        assert_eq!(VolumeTier::Low.colour().as_str(), "#4CAF50");
        assert_eq!(VolumeTier::Medium.colour().as_str(), "#FF9800");
        assert_eq!(VolumeTier::High.colour().as_str(), "#F44336");
    }

    #[rstest]
    #[case(85, 0.8, 15)]
    #[case(50, 3.2, 16)]
    #[case(0, 0.0, 5)]
    #[case(100, 5.0, 25)]
    #[case(100, 500.0, 25)]
    #[case(30, -2.0, 8)]
    #[case(30, f64::NAN, 8)]
    fn wait_time_cases(#[case] score: u8, #[case] distance: f64, #[case] expected: u32) {
        assert_eq!(wait_time_minutes(VolumeScore::from(score), distance), expected);
    }

    #[rstest]
    fn out_of_range_conversion_clamps() {
        assert_eq!(VolumeScore::from(250).get(), 100);
    }
}
