//! Preset parameter sets.
//!
//! Each preset lands on a slider position and highlights one behavior of
//! the mapper.

use crate::types::PlanetParams;

use super::Preset;

/// All available presets, in menu order (keys 1-4).
pub static PRESETS: &[Preset] = &[DEFAULT, CLOSE_APPROACH, QUARTER_ORBIT, DISTANT_PLANET];

/// Preset 1: the starting configuration.
///
/// Planet opposite the +x axis at 1 AU. The peak lands exactly on the last
/// sample of the light curve.
pub static DEFAULT: Preset = Preset {
    id: "default",
    name: "Default",
    description: "Planet at 180°, 1 AU. Peak on the right edge.",
    params: PlanetParams::unchecked(180.0, 1.0),
};

/// Preset 2: closest allowed approach.
///
/// The separation sits on the near-star threshold, so intensity is pinned
/// to the ceiling and the peak is centred in the window.
pub static CLOSE_APPROACH: Preset = Preset {
    id: "close_approach",
    name: "Close Approach",
    description: "Planet at 0°, 0.1 AU. Brightness at the ceiling.",
    params: PlanetParams::unchecked(0.0, 0.1),
};

/// Preset 3: quarter orbit.
pub static QUARTER_ORBIT: Preset = Preset {
    id: "quarter_orbit",
    name: "Quarter Orbit",
    description: "Planet at 90°, 2 AU. Moderate peak at t = 7.5.",
    params: PlanetParams::unchecked(90.0, 2.0),
};

/// Preset 4: far from the star.
///
/// Intensity is barely above baseline and the peak falls outside the
/// sampled window (t = 12.5).
pub static DISTANT_PLANET: Preset = Preset {
    id: "distant_planet",
    name: "Distant Planet",
    description: "Planet at 270°, 10 AU. Faint, off-window peak.",
    params: PlanetParams::unchecked(270.0, 10.0),
};
