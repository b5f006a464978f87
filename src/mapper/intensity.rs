//! Brightness scaling from star-planet separation.

use bevy::math::DVec2;

use super::geometry::separation;
use crate::types::{BASELINE_BRIGHTNESS, INTENSITY_CEILING, NEAR_SEPARATION_AU};

/// Intensity for a given separation in AU.
///
/// Inverse-distance rule `1 + 1/sep`, pinned to [`INTENSITY_CEILING`] when
/// `sep <= 0.1`. The cutoff is a hard step: just above the threshold the
/// rule yields ~11, while at or below it the ceiling of 5 applies.
pub fn intensity_at_separation(sep: f64) -> f64 {
    if sep <= NEAR_SEPARATION_AU {
        return INTENSITY_CEILING;
    }

    BASELINE_BRIGHTNESS + 1.0 / sep
}

/// Intensity for a planet at `position` (AU) relative to the star.
pub fn intensity(position: DVec2) -> f64 {
    intensity_at_separation(separation(position))
}
