//! Lensing parameter mapper.
//!
//! Pure pipeline from the two user parameters to everything the charts
//! draw:
//! - angle (deg) → radians
//! - (angle, distance) → planet position and separation
//! - separation → intensity, (angle, intensity) → sampled light curve
//!
//! Every stage is a total function of its inputs. Nothing is cached; the
//! caller re-evaluates on each parameter change.

pub mod geometry;
pub mod intensity;
pub mod light_curve;

#[cfg(test)]
mod proptest_mapper;

use bevy::math::DVec2;
use bevy::prelude::*;

pub use geometry::{deg_to_rad, project, separation};
pub use intensity::{intensity, intensity_at_separation};
pub use light_curve::{synthesize, time_offset, CurveSample, LightCurve};

use crate::types::PlanetParams;

/// Everything derived from one set of planet parameters.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct LensingSnapshot {
    /// Parameters this snapshot was evaluated for
    pub params: PlanetParams,
    /// Planet position relative to the star (AU)
    pub position: DVec2,
    /// Star-planet separation (AU)
    pub separation: f64,
    /// Amplitude of the brightness bump
    pub intensity: f64,
    /// Shift of the peak along the virtual time axis
    pub time_offset: f64,
    /// Sampled light curve
    pub curve: LightCurve,
}

impl LensingSnapshot {
    /// Centre of the brightness bump.
    pub fn peak_time(&self) -> f64 {
        self.curve.peak_time()
    }

    /// The highlighted midpoint sample.
    pub fn current(&self) -> CurveSample {
        self.curve.current()
    }
}

impl Default for LensingSnapshot {
    fn default() -> Self {
        evaluate(PlanetParams::default())
    }
}

/// Run the whole pipeline for one set of parameters.
pub fn evaluate(params: PlanetParams) -> LensingSnapshot {
    let position = project(params.angle_deg, params.distance_au);
    let separation = separation(position);
    let intensity = intensity_at_separation(separation);
    let curve = synthesize(params.angle_deg, intensity);

    LensingSnapshot {
        params,
        position,
        separation,
        intensity,
        time_offset: time_offset(params.angle_deg),
        curve,
    }
}
