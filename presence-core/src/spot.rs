use geo::Coord;

use crate::PersonalityTag;

/// A simulated presence at a fixed map location.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The `id`
/// is opaque to the engine but must be stable and unique within a spot set
/// so that render-list diffing and keying work downstream. Spots are
/// immutable once created; the engine only reads them and derives transient
/// views.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use presence_core::{PersonalityTag, Spot};
///
/// let spot = Spot::new("spot-1", Coord { x: -0.1, y: 51.5 }, PersonalityTag::ENFP);
/// assert_eq!(spot.id, "spot-1");
/// assert_eq!(spot.tag, PersonalityTag::ENFP);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spot {
    /// Opaque identifier, unique within a spot set.
    pub id: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Personality profile of the simulated presence.
    pub tag: PersonalityTag,
}

impl Spot {
    /// Construct a `Spot`.
    #[must_use]
    pub fn new(id: impl Into<String>, location: Coord<f64>, tag: PersonalityTag) -> Self {
        Self {
            id: id.into(),
            location,
            tag,
        }
    }
}
