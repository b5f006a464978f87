//! Test utilities for the lensing mapper.
//!
//! Provides fixtures for generating slider-domain parameters and
//! assertions for checking light-curve invariants.

use crate::mapper::LightCurve;
use crate::types::{ANGLE_STEP_DEG, DISTANCE_STEP_AU, PlanetParams};

/// Fixtures for creating test parameters.
pub mod fixtures {
    use super::*;
    use proptest::prelude::*;

    /// Strategy producing parameters exactly as the sliders can emit them:
    /// angles in 10° steps over [0, 360], distances in 0.1 AU steps over [0.1, 10].
    pub fn slider_params() -> impl Strategy<Value = PlanetParams> {
        (0u32..=36, 1u32..=100).prop_map(|(a, d)| {
            PlanetParams::unchecked(a as f64 * ANGLE_STEP_DEG, d as f64 * DISTANCE_STEP_AU)
        })
    }

    /// Every angle the slider can produce.
    pub fn slider_angles() -> impl Iterator<Item = f64> {
        (0..=36).map(|a| a as f64 * ANGLE_STEP_DEG)
    }
}

/// Assertions for light-curve invariants.
pub mod assertions {
    use super::*;

    /// Every sample sits between the baseline and baseline + intensity.
    pub fn brightness_within_bounds(curve: &LightCurve) -> bool {
        let ceiling = 1.0 + curve.intensity();
        curve
            .samples()
            .iter()
            .all(|s| s.brightness >= 1.0 && s.brightness <= ceiling)
    }

    /// Index of the brightest sample.
    pub fn brightest_index(curve: &LightCurve) -> usize {
        curve
            .samples()
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(best, max), (i, s)| {
                if s.brightness > max {
                    (i, s.brightness)
                } else {
                    (best, max)
                }
            })
            .0
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    ///
    /// This app uses MinimalPlugins for a lightweight test environment.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::synthesize;

    #[test]
    fn test_slider_angles_cover_full_circle() {
        let angles: Vec<f64> = fixtures::slider_angles().collect();
        assert_eq!(angles.len(), 37);
        assert_eq!(angles[0], 0.0);
        assert_eq!(angles[36], 360.0);
    }

    #[test]
    fn test_brightest_index_follows_peak() {
        // Peak at t=5 falls between samples 49 and 50
        let curve = synthesize(0.0, 3.0);
        let idx = assertions::brightest_index(&curve);
        assert!(idx == 49 || idx == 50, "unexpected brightest index {idx}");

        // Peak at t=10 is the last sample
        let curve = synthesize(180.0, 3.0);
        assert_eq!(assertions::brightest_index(&curve), 99);
    }

    #[test]
    fn test_bounds_helper_accepts_real_curve() {
        assert!(assertions::brightness_within_bounds(&synthesize(90.0, 5.0)));
    }
}
