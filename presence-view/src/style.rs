//! Distance-derived display weighting for visible spots.
//!
//! Styling is a pure function of mode, distance, and tag: opacity and radius
//! interpolate linearly from full weight at the viewer's position down to a
//! floor at the mode's range limit, and hue depends on the tag alone so
//! same-tag spots render identically across sessions and renders.

use geo::Coord;

use presence_core::{DisplayMode, PersonalityTag, Spot, distance};

/// Opacity at or beyond the mode's range limit.
pub const MIN_OPACITY: f64 = 0.10;
/// Additional opacity gained as distance falls to zero.
pub const OPACITY_SPAN: f64 = 0.80;
/// Marker radius at or beyond the mode's range limit.
pub const MIN_RADIUS: f64 = 5.0;
/// Additional radius gained as distance falls to zero.
pub const RADIUS_SPAN: f64 = 10.0;

/// Display weighting for one spot in one render tick.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotStyle {
    /// Marker opacity in `[0.10, 0.90]`.
    pub opacity: f64,
    /// Marker radius in `[5, 15]` display units.
    pub radius: f64,
    /// Colour-wheel hue in `[0, 360)`, stable per tag.
    pub color_hue: u16,
}

/// Derive the display weighting for a spot as seen from the viewer.
///
/// Safe to call on every render tick; the computation is pure and total
/// over valid inputs, with no error conditions.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use presence_core::{DisplayMode, PersonalityTag, Spot};
/// use presence_view::style;
///
/// let viewer = Coord { x: 0.0, y: 0.0 };
/// let spot = Spot::new("s", viewer, PersonalityTag::INTJ);
/// let style = style(DisplayMode::Near, viewer, &spot);
/// assert!((style.opacity - 0.90).abs() < 1e-9);
/// assert!((style.radius - 15.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn style(mode: DisplayMode, viewer_location: Coord<f64>, spot: &Spot) -> SpotStyle {
    style_for_distance(mode, distance(viewer_location, spot.location), spot.tag)
}

/// [`style`] for a pre-computed distance, e.g. from a
/// [`ScoredSpot`](crate::ScoredSpot) projection.
///
/// `proximity = 1 - clamp(distance / max_distance, 0, 1)`: 1 when
/// coincident with the viewer, 0 at or beyond the mode's range limit.
#[expect(
    clippy::float_arithmetic,
    reason = "style interpolation is floating point by nature"
)]
#[must_use]
pub fn style_for_distance(mode: DisplayMode, distance_m: f64, tag: PersonalityTag) -> SpotStyle {
    let proximity = 1.0 - (distance_m / mode.max_distance_m()).clamp(0.0, 1.0);
    SpotStyle {
        opacity: MIN_OPACITY + proximity * OPACITY_SPAN,
        radius: MIN_RADIUS + proximity * RADIUS_SPAN,
        color_hue: tag_hue(tag),
    }
}

/// Hue for a tag, in `[0, 360)`.
///
/// Combines the first and last axis letters of the canonical code, so the
/// value is stable for a tag across sessions and independent of distance.
/// Tags sharing both letters share a hue.
#[expect(
    clippy::integer_division_remainder_used,
    reason = "hue wraps onto the 0..360 colour wheel"
)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the modulo keeps the value under 360"
)]
#[must_use]
pub fn tag_hue(tag: PersonalityTag) -> u16 {
    let first = u32::from(tag.attitude.letter());
    let last = u32::from(tag.lifestyle.letter());
    ((first * last) % 360) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use presence_core::test_support::spot;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    // Halfway out in a dense mode: the worked mid-range example.
    #[case(DisplayMode::Near, 300.0, 0.50, 10.0)]
    // Coincident with the viewer.
    #[case(DisplayMode::Near, 0.0, 0.90, 15.0)]
    // At the range limit.
    #[case(DisplayMode::Near, 600.0, 0.10, 5.0)]
    // Beyond the range limit: clamped, not extrapolated.
    #[case(DisplayMode::Near, 5_000.0, 0.10, 5.0)]
    #[case(DisplayMode::Focused, 300.0, 0.50, 10.0)]
    // Wide mode fades over 2000 m instead.
    #[case(DisplayMode::Wide, 1_000.0, 0.50, 10.0)]
    #[case(DisplayMode::Wide, 300.0, 0.78, 13.5)]
    fn style_interpolates_from_distance(
        #[case] mode: DisplayMode,
        #[case] distance_m: f64,
        #[case] opacity: f64,
        #[case] radius: f64,
    ) {
        let style = style_for_distance(mode, distance_m, PersonalityTag::INTJ);
        assert!((style.opacity - opacity).abs() < TOLERANCE);
        assert!((style.radius - radius).abs() < TOLERANCE);
    }

    #[test]
    fn style_uses_great_circle_distance_from_the_viewer() {
        let viewer = geo::Coord { x: 0.0, y: 0.0 };
        let coincident = spot("here", 0.0, 0.0, PersonalityTag::ENFP);
        let styled = style(DisplayMode::Focused, viewer, &coincident);
        assert!((styled.opacity - 0.90).abs() < TOLERANCE);
        assert!((styled.radius - 15.0).abs() < TOLERANCE);

        // Roughly 111 km east: far outside every mode's range.
        let distant = spot("there", 1.0, 0.0, PersonalityTag::ENFP);
        let styled = style(DisplayMode::Wide, viewer, &distant);
        assert!((styled.opacity - 0.10).abs() < TOLERANCE);
        assert!((styled.radius - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn hue_is_stable_per_tag_and_independent_of_distance() {
        for tag in PersonalityTag::ALL {
            let near = style_for_distance(DisplayMode::Near, 0.0, tag);
            let far = style_for_distance(DisplayMode::Wide, 10_000.0, tag);
            assert_eq!(near.color_hue, far.color_hue);
            assert_eq!(near.color_hue, tag_hue(tag));
            assert!(near.color_hue < 360);
        }
    }

    #[rstest]
    // 'I' (73) * 'J' (74) = 5402; 5402 mod 360 = 2.
    #[case(PersonalityTag::INTJ, 2)]
    // 'E' (69) * 'P' (80) = 5520; 5520 mod 360 = 120.
    #[case(PersonalityTag::ENFP, 120)]
    // 'I' (73) * 'P' (80) = 5840; 5840 mod 360 = 80.
    #[case(PersonalityTag::INTP, 80)]
    // 'E' (69) * 'J' (74) = 5106; 5106 mod 360 = 66.
    #[case(PersonalityTag::ESFJ, 66)]
    fn hue_combines_first_and_last_axis_letters(#[case] tag: PersonalityTag, #[case] hue: u16) {
        assert_eq!(tag_hue(tag), hue);
    }
}
