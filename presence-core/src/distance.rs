//! Great-circle distance and the coordinate caller contract.
//!
//! [`distance`] is a pure numeric transform: it accepts any finite input and
//! never special-cases out-of-range values. Callers that want the range
//! contract enforced at their boundary use [`validate_coordinate`].

use geo::Coord;
use thiserror::Error;

/// Mean Earth radius in metres used by the haversine computation.
///
/// Pinned explicitly so distances stay reproducible across dependency
/// upgrades.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine great-circle distance between two WGS84 coordinates, in metres.
///
/// Symmetric, and zero iff both coordinates coincide (within floating
/// tolerance). Bounded above by half the Earth's circumference.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use presence_core::distance;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let east = Coord { x: 1.0, y: 0.0 };
/// let d = distance(origin, east);
/// assert!((d - 111_194.93).abs() < 1.0);
/// assert!((distance(east, origin) - d).abs() < f64::EPSILON);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "haversine is inherently a floating-point computation"
)]
#[must_use]
pub fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();

    let half_chord = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * half_chord.sqrt().asin()
}

/// Errors reported by [`validate_coordinate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// A component was NaN or infinite.
    #[error("coordinate components must be finite")]
    NotFinite,
    /// Latitude fell outside `[-90, 90]` degrees.
    #[error("latitude {value} is outside [-90, 90]")]
    LatitudeOutOfRange {
        /// The rejected latitude.
        value: f64,
    },
    /// Longitude fell outside `[-180, 180]` degrees.
    #[error("longitude {value} is outside [-180, 180]")]
    LongitudeOutOfRange {
        /// The rejected longitude.
        value: f64,
    },
}

/// Check the WGS84 range contract for a coordinate.
///
/// The numeric kernels in this crate stay total and do not perform this
/// check themselves; out-of-range input is a caller contract violation, and
/// this helper is the fail-fast edge for callers that want it enforced.
///
/// # Errors
/// Returns [`CoordinateError`] when a component is non-finite or outside the
/// WGS84 range (`x = longitude` in `[-180, 180]`, `y = latitude` in
/// `[-90, 90]`).
pub fn validate_coordinate(coordinate: Coord<f64>) -> Result<(), CoordinateError> {
    if !coordinate.x.is_finite() || !coordinate.y.is_finite() {
        return Err(CoordinateError::NotFinite);
    }
    if !(-90.0..=90.0).contains(&coordinate.y) {
        return Err(CoordinateError::LatitudeOutOfRange {
            value: coordinate.y,
        });
    }
    if !(-180.0..=180.0).contains(&coordinate.x) {
        return Err(CoordinateError::LongitudeOutOfRange {
            value: coordinate.x,
        });
    }
    Ok(())
}
