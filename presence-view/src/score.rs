//! Per-evaluation projection of a spot against the viewer.

use geo::Coord;

use presence_core::{PersonalityTag, Spot, distance};

/// A spot annotated with its affinity and distance for one evaluation.
///
/// Transient and never persisted: projections are recomputed whenever the
/// viewer location, the viewer tag, or the spot set changes. No history is
/// kept anywhere; the projection is pure in its inputs.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use presence_core::{PersonalityTag, Spot};
/// use presence_view::ScoredSpot;
///
/// let viewer = Coord { x: 0.0, y: 0.0 };
/// let spot = Spot::new("s", viewer, PersonalityTag::INTP);
/// let scored = ScoredSpot::project(viewer, PersonalityTag::INTJ, &spot);
/// assert_eq!(scored.affinity, 3);
/// assert!(scored.distance_m.abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredSpot {
    /// The underlying spot.
    pub spot: Spot,
    /// Axis agreement with the viewer's tag, in `0..=4`.
    pub affinity: u8,
    /// Great-circle distance from the viewer, in metres.
    pub distance_m: f64,
}

impl ScoredSpot {
    /// Project a spot against the viewer's location and tag.
    #[must_use]
    pub fn project(viewer_location: Coord<f64>, viewer_tag: PersonalityTag, spot: &Spot) -> Self {
        Self {
            affinity: viewer_tag.affinity(spot.tag),
            distance_m: distance(viewer_location, spot.location),
            spot: spot.clone(),
        }
    }
}
