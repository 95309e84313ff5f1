//! Viewport decisions for the presence engine.
//!
//! Given a display mode, the viewer's personality tag and location, and a
//! candidate spot set, this crate decides which spots are visible, in what
//! rank order, and with what visual weighting. Both decisions are pure
//! synchronous functions with no I/O and no shared state: identical inputs
//! give identical outputs, so they are safe to call on every render tick
//! from any thread. The UI layer owns state, scheduling, and debouncing.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod filter;
mod score;
mod style;

pub use filter::{FilterPolicy, PolicyError, select, select_scored, select_with_policy};
pub use score::ScoredSpot;
pub use style::{
    MIN_OPACITY, MIN_RADIUS, OPACITY_SPAN, RADIUS_SPAN, SpotStyle, style, style_for_distance,
    tag_hue,
};
