//! Deterministic fixtures for tests and demos.
//!
//! Randomness never enters the engine proper; this module exists so
//! downstream tests inject reproducible spot sets instead of depending on
//! the engine for generation.

use geo::Coord;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{EARTH_RADIUS_M, PersonalityTag, Spot};

/// Shorthand spot constructor for test tables.
#[must_use]
pub fn spot(id: &str, x: f64, y: f64, tag: PersonalityTag) -> Spot {
    Spot::new(id, Coord { x, y }, tag)
}

/// Scatter `count` spots uniformly around `centre`, deterministically.
///
/// The same seed always yields the same spot set: ids are `spot-0` through
/// `spot-{count-1}`, tags are drawn from the sixteen canonical values, and
/// positions fall within `radius_m` metres of the centre. Intended for
/// mid-latitude centres; the flat-earth offset degrades towards the poles.
///
/// # Panics
/// Panics when `radius_m` is negative.
#[expect(
    clippy::float_arithmetic,
    reason = "converting a metre offset to degrees is floating point"
)]
#[must_use]
pub fn scatter_spots(seed: u64, centre: Coord<f64>, count: usize, radius_m: f64) -> Vec<Spot> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let tag = PersonalityTag::ALL
                .choose(&mut rng)
                .copied()
                .unwrap_or(PersonalityTag::ENFP);
            let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
            let offset_m = rng.gen_range(0.0..=radius_m);
            let d_lat = (offset_m * bearing.cos() / EARTH_RADIUS_M).to_degrees();
            let d_lon = (offset_m * bearing.sin()
                / (EARTH_RADIUS_M * centre.y.to_radians().cos()))
            .to_degrees();
            Spot::new(
                format!("spot-{i}"),
                Coord {
                    x: centre.x + d_lon,
                    y: centre.y + d_lat,
                },
                tag,
            )
        })
        .collect()
}
