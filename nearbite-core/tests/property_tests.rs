//! Property-based tests for the discovery core.
//!
//! # Invariants tested
//!
//! - **Distance:** symmetric and zero for identical points.
//! - **Scores:** always within `0..=100`; tiers partition the range at 40 and 70.
//! - **Wait time:** non-decreasing in both score and distance.
//! - **Ordering:** sorting is stable and idempotent; filtering keeps a
//!   subsequence and `all` is the identity.
//! - **Markers:** never more than one primary plus five restaurants.
//! - **History:** fourteen samples, each within `10..=95`.

use chrono::NaiveDate;
use geo::Coord;
use nearbite_core::geodesic::{distance_miles, lat_lng};
use nearbite_core::query::{filter, sort_by_distance};
use nearbite_core::test_support::restaurant_at;
use nearbite_core::{
    LandmarkIndex, Restaurant, RestaurantFilter, SyntheticVolumeHistory, VolumeHistorySource,
    VolumeScore, VolumeTier, derive_markers, wait_time_minutes,
};
use proptest::prelude::*;

fn coord_strategy() -> impl Strategy<Value = Coord<f64>> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0).prop_map(|(lat, lng)| lat_lng(lat, lng))
}

fn filter_strategy() -> impl Strategy<Value = RestaurantFilter> {
    prop_oneof![
        Just(RestaurantFilter::All),
        Just(RestaurantFilter::NearPrimary),
        Just(RestaurantFilter::Quick),
        Just(RestaurantFilter::HighVolume),
    ]
}

/// Restaurants with distances on a coarse grid so ties are common.
fn restaurants_strategy(max: usize) -> impl Strategy<Value = Vec<Restaurant>> {
    prop::collection::vec((0_u8..40, 0_u8..=100), 0..max).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (tenths, score))| {
                restaurant_at(
                    &format!("r{i}"),
                    f64::from(tenths) / 10.0,
                    VolumeScore::from(score),
                )
            })
            .collect()
    })
}

fn ids(restaurants: &[Restaurant]) -> Vec<&str> {
    restaurants.iter().map(|r| r.id.as_str()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn distance_is_symmetric(a in coord_strategy(), b in coord_strategy()) {
        prop_assert_eq!(distance_miles(a, b), distance_miles(b, a));
        prop_assert_eq!(distance_miles(a, a), 0.0);
    }

    #[test]
    fn score_stays_in_range(signal in proptest::option::of(any::<u64>())) {
        let score = VolumeScore::from_signal(signal).get();
        prop_assert!(score <= 100);
    }

    #[test]
    fn tier_partitions_the_range(score in 0_u8..=100) {
        let expected = if score > 70 {
            VolumeTier::High
        } else if score > 40 {
            VolumeTier::Medium
        } else {
            VolumeTier::Low
        };
        prop_assert_eq!(VolumeScore::from(score).tier(), expected);
    }

    #[test]
    fn wait_time_is_monotonic(
        low in 0_u8..=100,
        high in 0_u8..=100,
        near in 0.0_f64..20.0,
        far in 0.0_f64..20.0,
    ) {
        let (low, high) = (low.min(high), low.max(high));
        let (near, far) = (near.min(far), near.max(far));
        prop_assert!(
            wait_time_minutes(VolumeScore::from(low), near)
                <= wait_time_minutes(VolumeScore::from(high), near)
        );
        prop_assert!(
            wait_time_minutes(VolumeScore::from(low), near)
                <= wait_time_minutes(VolumeScore::from(low), far)
        );
    }

    #[test]
    fn sort_is_idempotent_and_stable(restaurants in restaurants_strategy(30)) {
        let once = sort_by_distance(restaurants.clone());
        let twice = sort_by_distance(once.clone());
        prop_assert_eq!(&once, &twice);
        let index = |r: &Restaurant| restaurants.iter().position(|x| x.id == r.id);
        prop_assert!(once.windows(2).all(|pair| matches!(
            pair,
            [a, b] if a.distance_miles < b.distance_miles || index(a) < index(b)
        )));
    }

    #[test]
    fn filter_keeps_an_ordered_subsequence(
        restaurants in restaurants_strategy(30),
        predicate in filter_strategy(),
    ) {
        let kept = filter(&restaurants, predicate);
        let mut source = ids(&restaurants).into_iter();
        prop_assert!(ids(&kept).into_iter().all(|id| source.any(|s| s == id)));
        prop_assert!(kept.iter().all(|r| predicate.matches(r)));
    }

    #[test]
    fn filter_all_is_identity(restaurants in restaurants_strategy(30)) {
        prop_assert_eq!(filter(&restaurants, RestaurantFilter::All), restaurants);
    }

    #[test]
    fn markers_are_capped_at_six(restaurants in restaurants_strategy(60)) {
        let markers = derive_markers(&restaurants, LandmarkIndex::washington_dc().primary());
        prop_assert!(markers.len() <= 6);
        prop_assert_eq!(markers.len(), 1 + restaurants.len().min(5));
    }

    #[test]
    fn zero_radius_finds_no_landmarks(subject in coord_strategy()) {
        prop_assert!(LandmarkIndex::washington_dc().nearby_to(subject, 0.0).is_empty());
    }

    #[test]
    fn synthetic_history_stays_in_bounds(
        seed in any::<u64>(),
        id in "[a-z0-9]{1,12}",
        offset in 0_u64..3650,
    ) {
        let base = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date");
        let day = base + chrono::Days::new(offset);
        let samples = SyntheticVolumeHistory::new(seed).volume_history(&id, day);
        prop_assert_eq!(samples.len(), 14);
        prop_assert!(samples.iter().all(|s| (10..=95).contains(&s.score)));
        let times_well_formed = samples.iter().all(|s| {
            let (clock, suffix) = s.time.split_once(' ').unwrap_or_default();
            let hour = clock.strip_suffix(":00").and_then(|h| h.parse::<u8>().ok());
            matches!(suffix, "AM" | "PM") && hour.is_some_and(|h| (1..=12).contains(&h))
        });
        prop_assert!(times_well_formed);
    }
}
