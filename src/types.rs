//! Core types and constants for the lensing explorer.

use bevy::prelude::*;

/// System set for ordering parameter updates before recomputation.
///
/// Keyboard shortcuts and preset/reset handling must land before the
/// snapshot is rebuilt so the charts never lag a frame behind the input.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LensingSystemSet {
    /// Anything that writes [`PlanetParams`]
    Input,
    /// Snapshot re-evaluation (runs after input)
    Recompute,
}

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Slider domain for the planet angle (degrees)
pub const ANGLE_MIN_DEG: f64 = 0.0;
pub const ANGLE_MAX_DEG: f64 = 360.0;
pub const ANGLE_STEP_DEG: f64 = 10.0;

/// Slider domain for the planet distance (AU)
pub const DISTANCE_MIN_AU: f64 = 0.1;
pub const DISTANCE_MAX_AU: f64 = 10.0;
pub const DISTANCE_STEP_AU: f64 = 0.1;

/// Starting parameters when the app opens.
pub const DEFAULT_ANGLE_DEG: f64 = 180.0;
pub const DEFAULT_DISTANCE_AU: f64 = 1.0;

/// Separation at or below which intensity is pinned to the ceiling.
pub const NEAR_SEPARATION_AU: f64 = 0.1;

/// Intensity reported inside the near-separation guard.
pub const INTENSITY_CEILING: f64 = 5.0;

/// Brightness of the unlensed background star.
pub const BASELINE_BRIGHTNESS: f64 = 1.0;

/// Virtual time axis of the light curve.
pub const TIME_START: f64 = 0.0;
pub const TIME_END: f64 = 10.0;

/// Number of light-curve samples over the virtual time axis.
pub const SAMPLE_COUNT: usize = 100;

/// Index of the sample highlighted as the "current" brightness.
pub const CURRENT_SAMPLE_INDEX: usize = SAMPLE_COUNT / 2;

/// Peak time for an angle of zero.
pub const BASE_PEAK_TIME: f64 = 5.0;

/// Standard deviation of the brightness bump (virtual time units).
pub const PEAK_WIDTH: f64 = 1.5;

/// Spatial chart window, both axes (AU).
pub const SPACE_WINDOW: (f64, f64) = (-10.0, 10.0);

/// Light-curve chart windows.
pub const CURVE_TIME_WINDOW: (f64, f64) = (TIME_START, TIME_END);
pub const CURVE_BRIGHTNESS_WINDOW: (f64, f64) = (0.8, 6.0);

/// Planet parameters chosen by the user.
///
/// The mapper accepts any real values; range checks live in
/// [`PlanetParams::new`] and in the slider widgets.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct PlanetParams {
    /// Orbital angle in degrees, measured counter-clockwise from +x
    pub angle_deg: f64,
    /// Distance from the background star in AU
    pub distance_au: f64,
}

impl Default for PlanetParams {
    fn default() -> Self {
        Self {
            angle_deg: DEFAULT_ANGLE_DEG,
            distance_au: DEFAULT_DISTANCE_AU,
        }
    }
}

impl PlanetParams {
    /// Build parameters without any range checking.
    pub const fn unchecked(angle_deg: f64, distance_au: f64) -> Self {
        Self {
            angle_deg,
            distance_au,
        }
    }

    /// Same distance, different angle.
    pub fn with_angle(self, angle_deg: f64) -> Self {
        Self { angle_deg, ..self }
    }

    /// Same angle, different distance.
    pub fn with_distance(self, distance_au: f64) -> Self {
        Self {
            distance_au,
            ..self
        }
    }
}
