//! Visibility selection and ranking.
//!
//! `Wide` mode shows everything: the point of that density is spatial
//! distribution, not affinity. The denser modes rank candidates by affinity
//! with the viewer's tag and apply a two-tier threshold: prefer strong
//! matches, but relax one step when too few exist so the viewport never
//! looks empty in sparse or low-affinity spot sets. The relaxation never
//! goes past the second tier.

use geo::Coord;
use thiserror::Error;

use presence_core::{AXIS_COUNT, DisplayMode, PersonalityTag, Spot};

use crate::ScoredSpot;

/// Threshold configuration for the dense display modes.
///
/// The defaults are the shipped behaviour: keep affinity ≥ 3, relaxing to
/// ≥ 2 when fewer than 10 spots clear the first bar. Callers supplying
/// their own policy should run it through [`FilterPolicy::validate`];
/// the selection functions trust their argument.
///
/// # Examples
/// ```
/// use presence_view::FilterPolicy;
///
/// let policy = FilterPolicy::default().validate().expect("defaults are valid");
/// assert_eq!(policy.primary_threshold, 3);
/// assert_eq!(policy.relaxed_threshold, 2);
/// assert_eq!(policy.relaxation_floor, 10);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterPolicy {
    /// Affinity a spot needs to survive the first selection tier.
    pub primary_threshold: u8,
    /// Fallback affinity bar used when the first tier is underpopulated.
    pub relaxed_threshold: u8,
    /// Minimum first-tier population below which the bar is relaxed.
    pub relaxation_floor: usize,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            primary_threshold: 3,
            relaxed_threshold: 2,
            relaxation_floor: 10,
        }
    }
}

/// Errors returned by [`FilterPolicy::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// A threshold exceeded the affinity scale.
    #[error("threshold {threshold} exceeds the {AXIS_COUNT}-point affinity scale")]
    ThresholdAboveScale {
        /// The rejected threshold.
        threshold: u8,
    },
    /// The relaxed threshold was stricter than the primary one.
    #[error("relaxed threshold {relaxed} must not exceed primary threshold {primary}")]
    RelaxedAbovePrimary {
        /// First-tier threshold.
        primary: u8,
        /// Offending fallback threshold.
        relaxed: u8,
    },
}

impl FilterPolicy {
    /// Validate the policy and return it unchanged.
    ///
    /// # Errors
    /// Returns [`PolicyError`] when a threshold exceeds the affinity scale
    /// or the relaxed threshold is stricter than the primary one.
    pub fn validate(self) -> Result<Self, PolicyError> {
        if self.primary_threshold > AXIS_COUNT {
            return Err(PolicyError::ThresholdAboveScale {
                threshold: self.primary_threshold,
            });
        }
        if self.relaxed_threshold > self.primary_threshold {
            return Err(PolicyError::RelaxedAbovePrimary {
                primary: self.primary_threshold,
                relaxed: self.relaxed_threshold,
            });
        }
        Ok(self)
    }
}

/// Select and rank the spots visible in the given mode.
///
/// Returns the display order, most relevant first. `Wide` mode returns every
/// spot in input order. The denser modes rank by affinity descending with a
/// stable sort — equal-affinity spots keep their input order, so results are
/// deterministic given a deterministic input — then apply the default
/// [`FilterPolicy`] and truncate to the mode's cap.
///
/// An empty spot set yields an empty result; no error conditions exist.
///
/// # Examples
/// ```
/// use presence_core::{DisplayMode, PersonalityTag, Spot};
/// use geo::Coord;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let spots = vec![
///     Spot::new("a", origin, PersonalityTag::ESFP),
///     Spot::new("b", origin, PersonalityTag::INTJ),
/// ];
/// let visible = presence_view::select(DisplayMode::Focused, PersonalityTag::INTJ, &spots);
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].id, "b");
/// ```
#[must_use]
pub fn select(mode: DisplayMode, viewer_tag: PersonalityTag, spots: &[Spot]) -> Vec<Spot> {
    select_with_policy(mode, viewer_tag, spots, FilterPolicy::default())
}

/// [`select`] with a caller-supplied threshold policy.
///
/// The policy is trusted as given; validate caller-supplied configuration
/// with [`FilterPolicy::validate`] at the boundary where it enters.
#[must_use]
pub fn select_with_policy(
    mode: DisplayMode,
    viewer_tag: PersonalityTag,
    spots: &[Spot],
    policy: FilterPolicy,
) -> Vec<Spot> {
    if matches!(mode, DisplayMode::Wide) {
        return spots.to_vec();
    }
    let scored = spots
        .iter()
        .map(|spot| (viewer_tag.affinity(spot.tag), spot.clone()))
        .collect();
    rank_and_trim(mode, policy, scored)
}

/// Select and rank visible spots, keeping their affinity and distance
/// annotations.
///
/// Same selection as [`select`] under the default policy, for callers that
/// feed both the filter and the style mapper in a single pass. `Wide` mode
/// projects every spot in input order.
#[must_use]
pub fn select_scored(
    mode: DisplayMode,
    viewer_location: Coord<f64>,
    viewer_tag: PersonalityTag,
    spots: &[Spot],
) -> Vec<ScoredSpot> {
    let projected: Vec<ScoredSpot> = spots
        .iter()
        .map(|spot| ScoredSpot::project(viewer_location, viewer_tag, spot))
        .collect();
    if matches!(mode, DisplayMode::Wide) {
        return projected;
    }
    let scored = projected.into_iter().map(|p| (p.affinity, p)).collect();
    rank_and_trim(mode, FilterPolicy::default(), scored)
}

/// Rank by affinity descending, apply the two-tier threshold, truncate.
///
/// Only meaningful for the dense modes; `Wide` short-circuits in callers.
fn rank_and_trim<T>(mode: DisplayMode, policy: FilterPolicy, scored: Vec<(u8, T)>) -> Vec<T> {
    let mut ranked = scored;
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    let qualifying = ranked
        .iter()
        .filter(|(affinity, _)| *affinity >= policy.primary_threshold)
        .count();
    let threshold = if qualifying >= policy.relaxation_floor {
        policy.primary_threshold
    } else {
        log::debug!(
            "only {qualifying} spots at affinity >= {}; relaxing to >= {}",
            policy.primary_threshold,
            policy.relaxed_threshold,
        );
        policy.relaxed_threshold
    };

    let cap = mode.result_cap().unwrap_or(ranked.len());
    ranked
        .into_iter()
        .filter(|(affinity, _)| *affinity >= threshold)
        .map(|(_, item)| item)
        .take(cap)
        .collect()
}
