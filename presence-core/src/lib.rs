//! Domain types and leaf computations for the presence engine.
//!
//! The crate models the value types the engine operates on — canonical
//! [`PersonalityTag`] codes, map [`Spot`]s, and the viewer's
//! [`DisplayMode`] — together with the two leaf metrics everything else is
//! built from: great-circle [`distance`] and the axis-agreement
//! [`PersonalityTag::affinity`] score. Everything here is a pure value
//! computation: no I/O, no shared state, and identical inputs always give
//! identical outputs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod distance;
mod mode;
mod spot;
mod tag;

#[cfg(feature = "test-support")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use distance::{CoordinateError, EARTH_RADIUS_M, distance, validate_coordinate};
pub use mode::{DisplayMode, ModeParseError};
pub use spot::Spot;
pub use tag::{
    AXIS_COUNT, Attitude, Judgement, Lifestyle, Perception, PersonalityTag, TagParseError,
};
