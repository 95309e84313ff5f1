//! Facade crate for the presence engine.
//!
//! Re-exports the domain types and the viewport decision functions so UI
//! layers depend on a single crate. The engine is consumed as a library:
//! callers supply the viewer location, viewer tag, display mode, and spot
//! set, and receive visibility and styling decisions back. No network,
//! file, or CLI surface exists here.

#![forbid(unsafe_code)]

pub use presence_core::{
    AXIS_COUNT, Attitude, CoordinateError, DisplayMode, EARTH_RADIUS_M, Judgement, Lifestyle,
    ModeParseError, Perception, PersonalityTag, Spot, TagParseError, distance,
    validate_coordinate,
};

pub use presence_view::{
    FilterPolicy, MIN_OPACITY, MIN_RADIUS, OPACITY_SPAN, PolicyError, RADIUS_SPAN, ScoredSpot,
    SpotStyle, select, select_scored, select_with_policy, style, style_for_distance, tag_hue,
};

#[cfg(feature = "test-support")]
pub use presence_core::test_support;
