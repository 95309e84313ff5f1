//! Property-based tests for the great-circle distance kernel.
//!
//! # Invariants tested
//!
//! - **Symmetry:** `distance(a, b) == distance(b, a)`.
//! - **Identity:** `distance(a, a)` is zero within floating tolerance.
//! - **Bounds:** distances are finite, non-negative, and never exceed half
//!   the Earth's circumference.

use geo::Coord;
use presence_core::{EARTH_RADIUS_M, distance};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = Coord<f64>> {
    (-180.0_f64..=180.0, -90.0_f64..=90.0).prop_map(|(x, y)| Coord { x, y })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        let forward = distance(a, b);
        let backward = distance(b, a);
        prop_assert!((forward - backward).abs() <= 1e-9);
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert!(distance(a, a).abs() <= 1e-9);
    }

    #[test]
    fn distance_is_finite_and_bounded(a in coordinate(), b in coordinate()) {
        let d = distance(a, b);
        prop_assert!(d.is_finite());
        prop_assert!(d >= 0.0);
        // Half the great circle, with headroom for floating error.
        prop_assert!(d <= EARTH_RADIUS_M * std::f64::consts::PI + 1.0);
    }
}
