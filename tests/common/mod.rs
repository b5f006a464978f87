//! Common test utilities for integration tests.

use bevy::prelude::*;
use exolens::mapper::LightCurve;
use exolens::types::PlanetParams;

/// Every (angle, distance) pair reachable with the sliders, coarsened to
/// keep the grid small: all 37 angles by every tenth distance step.
pub fn slider_grid() -> Vec<PlanetParams> {
    let mut grid = Vec::new();
    for a in 0..=36 {
        for d in (1..=100).step_by(10) {
            grid.push(PlanetParams::unchecked(a as f64 * 10.0, d as f64 / 10.0));
        }
    }
    grid
}

/// Index of the brightest sample.
pub fn brightest_index(curve: &LightCurve) -> usize {
    let mut best = 0;
    for (i, s) in curve.samples().iter().enumerate() {
        if s.brightness > curve.samples()[best].brightness {
            best = i;
        }
    }
    best
}

/// Create a minimal Bevy app for testing without rendering.
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}
