//! Display modes: the three density presets the viewport cycles through.
//!
//! Each mode drives both the map zoom (owned by the UI layer) and the
//! engine-side parameters exposed here: how many spots survive selection and
//! over what range distance fades styling out.
//!
//! # Examples
//! ```
//! use presence_core::DisplayMode;
//!
//! assert_eq!(DisplayMode::Focused.result_cap(), Some(5));
//! assert_eq!(DisplayMode::Wide.result_cap(), None);
//! ```

use thiserror::Error;

/// Density preset selected by the viewer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayMode {
    /// Zoomed out: every spot is shown to convey spatial distribution.
    Wide,
    /// Mid density: affinity-filtered, up to 18 spots.
    Near,
    /// Tightest view: affinity-filtered, up to 5 spots.
    Focused,
}

impl DisplayMode {
    /// Maximum number of spots the mode displays, or `None` for no cap.
    #[must_use]
    pub const fn result_cap(self) -> Option<usize> {
        match self {
            Self::Wide => None,
            Self::Near => Some(18),
            Self::Focused => Some(5),
        }
    }

    /// Range in metres over which styling fades from full to minimum weight.
    ///
    /// The denser modes share one range; only `Wide` differs.
    #[must_use]
    pub const fn max_distance_m(self) -> f64 {
        match self {
            Self::Wide => 2000.0,
            Self::Near | Self::Focused => 600.0,
        }
    }

    /// Return the mode as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Near => "near",
            Self::Focused => "focused",
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`DisplayMode`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown display mode '{input}'")]
pub struct ModeParseError {
    /// The rejected input.
    pub input: String,
}

impl std::str::FromStr for DisplayMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wide" => Ok(Self::Wide),
            "near" => Ok(Self::Near),
            "focused" => Ok(Self::Focused),
            _ => Err(ModeParseError {
                input: s.to_owned(),
            }),
        }
    }
}
