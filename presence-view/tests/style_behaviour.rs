//! Behaviour tests for the styling pipeline, driven through real
//! coordinates and the scored-selection flow a caller would use.

use geo::Coord;
use presence_core::test_support::spot;
use presence_core::{DisplayMode, PersonalityTag, distance};
use presence_view::{select_scored, style, style_for_distance, tag_hue};

const TOLERANCE: f64 = 1e-6;

#[test]
fn coincident_spots_render_at_full_weight() {
    let viewer = Coord { x: -0.1278, y: 51.5074 };
    let candidate = spot("here", viewer.x, viewer.y, PersonalityTag::ISFJ);
    for mode in [DisplayMode::Wide, DisplayMode::Near, DisplayMode::Focused] {
        let styled = style(mode, viewer, &candidate);
        assert!((styled.opacity - 0.90).abs() < TOLERANCE);
        assert!((styled.radius - 15.0).abs() < TOLERANCE);
    }
}

#[test]
fn spots_at_or_beyond_the_range_limit_render_at_the_floor() {
    let viewer = Coord { x: 0.0, y: 0.0 };
    // ~0.02 degrees of latitude is ~2.2 km: beyond every mode's range.
    let candidate = spot("far", 0.0, 0.02, PersonalityTag::ISFJ);
    assert!(distance(viewer, candidate.location) > 2000.0);
    for mode in [DisplayMode::Wide, DisplayMode::Near, DisplayMode::Focused] {
        let styled = style(mode, viewer, &candidate);
        assert!((styled.opacity - 0.10).abs() < TOLERANCE);
        assert!((styled.radius - 5.0).abs() < TOLERANCE);
    }
}

/// Styling a scored selection in one pass: the projection's distance feeds
/// `style_for_distance` and agrees with styling the spot directly.
#[test]
fn scored_selection_styles_consistently_with_direct_styling() {
    let viewer = Coord { x: 13.405, y: 52.52 };
    let spots = vec![
        spot("a", 13.406, 52.521, PersonalityTag::INTJ),
        spot("b", 13.404, 52.519, PersonalityTag::INTP),
        spot("c", 13.405, 52.52, PersonalityTag::ENTJ),
    ];
    let scored = select_scored(DisplayMode::Near, viewer, PersonalityTag::INTJ, &spots);
    assert!(!scored.is_empty());
    for entry in &scored {
        let via_projection = style_for_distance(DisplayMode::Near, entry.distance_m, entry.spot.tag);
        let direct = style(DisplayMode::Near, viewer, &entry.spot);
        assert!((via_projection.opacity - direct.opacity).abs() < TOLERANCE);
        assert!((via_projection.radius - direct.radius).abs() < TOLERANCE);
        assert_eq!(via_projection.color_hue, direct.color_hue);
    }
}

#[test]
fn same_tag_spots_share_a_hue_regardless_of_position() {
    let near = spot("near", 0.0, 0.0, PersonalityTag::ENFP);
    let far = spot("far", 10.0, 10.0, PersonalityTag::ENFP);
    let viewer = Coord { x: 0.0, y: 0.0 };
    let a = style(DisplayMode::Wide, viewer, &near);
    let b = style(DisplayMode::Wide, viewer, &far);
    assert_eq!(a.color_hue, b.color_hue);
    assert_eq!(a.color_hue, tag_hue(PersonalityTag::ENFP));
}
