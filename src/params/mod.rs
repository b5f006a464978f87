//! Parameter validation, slider quantization and presets.
//!
//! The mapper accepts any real input. Everything here belongs to the
//! presentation side: it decides which values the user can reach.

pub mod presets;

use bevy::math::DVec2;

use crate::types::{
    ANGLE_MAX_DEG, ANGLE_MIN_DEG, ANGLE_STEP_DEG, DISTANCE_MAX_AU, DISTANCE_MIN_AU,
    DISTANCE_STEP_AU, PlanetParams,
};

pub use presets::PRESETS;

/// Decimal places kept after snapping, enough to erase float noise.
const SNAP_PRECISION: f64 = 1e9;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("{name} must be a finite number")]
    NonFinite { name: &'static str },

    #[error("angle {0}° outside [0, 360]")]
    AngleOutOfRange(f64),

    #[error("distance {0} AU outside [0.1, 10]")]
    DistanceOutOfRange(f64),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}

/// A named parameter set.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    /// Unique identifier, used on the command line.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description for tooltips.
    pub description: &'static str,
    /// Parameters the preset loads.
    pub params: PlanetParams,
}

/// Look up a preset by id.
pub fn get_preset(id: &str) -> Result<&'static Preset, ParamError> {
    PRESETS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ParamError::UnknownPreset(id.to_string()))
}

/// Preset whose parameters equal `params`, if any.
pub fn matching_preset(params: &PlanetParams) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.params == *params)
}

/// Snap `value` to the nearest multiple of `step` above `min`, clamped to `[min, max]`.
///
/// The result is rounded to 9 decimals so repeated steps of 0.1 stay at
/// 0.3 rather than 0.30000000000000004.
pub fn snap_to_step(value: f64, min: f64, max: f64, step: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }

    let steps = ((value - min) / step).round();
    let snapped = (min + steps * step).clamp(min, max);
    (snapped * SNAP_PRECISION).round() / SNAP_PRECISION
}

/// Slider-side operations on [`PlanetParams`].
impl PlanetParams {
    /// Validate user-supplied values against the slider domains.
    pub fn new(angle_deg: f64, distance_au: f64) -> Result<Self, ParamError> {
        if !angle_deg.is_finite() {
            return Err(ParamError::NonFinite { name: "angle" });
        }
        if !distance_au.is_finite() {
            return Err(ParamError::NonFinite { name: "distance" });
        }
        if !(ANGLE_MIN_DEG..=ANGLE_MAX_DEG).contains(&angle_deg) {
            return Err(ParamError::AngleOutOfRange(angle_deg));
        }
        if !(DISTANCE_MIN_AU..=DISTANCE_MAX_AU).contains(&distance_au) {
            return Err(ParamError::DistanceOutOfRange(distance_au));
        }

        Ok(PlanetParams::unchecked(angle_deg, distance_au))
    }

    /// Parameters placing the planet nearest to `position` (AU), snapped
    /// onto the slider grid. Used when the user clicks in the spatial chart.
    pub fn from_position(position: DVec2) -> Self {
        let angle = position.y.atan2(position.x).to_degrees().rem_euclid(360.0);
        PlanetParams::unchecked(angle, position.length()).quantized()
    }

    /// Snap both values onto the slider grid.
    pub fn quantized(self) -> Self {
        PlanetParams::unchecked(
            snap_to_step(self.angle_deg, ANGLE_MIN_DEG, ANGLE_MAX_DEG, ANGLE_STEP_DEG),
            snap_to_step(self.distance_au, DISTANCE_MIN_AU, DISTANCE_MAX_AU, DISTANCE_STEP_AU),
        )
    }

    /// Move the angle by whole slider steps, clamped to the domain.
    pub fn nudge_angle(&mut self, steps: i32) {
        self.angle_deg = snap_to_step(
            self.angle_deg + steps as f64 * ANGLE_STEP_DEG,
            ANGLE_MIN_DEG,
            ANGLE_MAX_DEG,
            ANGLE_STEP_DEG,
        );
    }

    /// Move the distance by whole slider steps, clamped to the domain.
    pub fn nudge_distance(&mut self, steps: i32) {
        self.distance_au = snap_to_step(
            self.distance_au + steps as f64 * DISTANCE_STEP_AU,
            DISTANCE_MIN_AU,
            DISTANCE_MAX_AU,
            DISTANCE_STEP_AU,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_domain_edges() {
        assert!(PlanetParams::new(0.0, 0.1).is_ok());
        assert!(PlanetParams::new(360.0, 10.0).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            PlanetParams::new(361.0, 1.0),
            Err(ParamError::AngleOutOfRange(361.0))
        );
        assert_eq!(
            PlanetParams::new(-10.0, 1.0),
            Err(ParamError::AngleOutOfRange(-10.0))
        );
        assert_eq!(
            PlanetParams::new(90.0, 0.05),
            Err(ParamError::DistanceOutOfRange(0.05))
        );
        assert_eq!(
            PlanetParams::new(90.0, 10.5),
            Err(ParamError::DistanceOutOfRange(10.5))
        );
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert_eq!(
            PlanetParams::new(f64::NAN, 1.0),
            Err(ParamError::NonFinite { name: "angle" })
        );
        assert_eq!(
            PlanetParams::new(0.0, f64::INFINITY),
            Err(ParamError::NonFinite { name: "distance" })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParamError::AngleOutOfRange(400.0).to_string(),
            "angle 400° outside [0, 360]"
        );
        assert_eq!(
            ParamError::UnknownPreset("nope".into()).to_string(),
            "unknown preset 'nope'"
        );
    }

    #[test]
    fn test_snap_to_step() {
        assert_eq!(snap_to_step(44.0, 0.0, 360.0, 10.0), 40.0);
        assert_eq!(snap_to_step(45.0, 0.0, 360.0, 10.0), 50.0);
        assert_eq!(snap_to_step(400.0, 0.0, 360.0, 10.0), 360.0);
        assert_eq!(snap_to_step(-5.0, 0.0, 360.0, 10.0), 0.0);
        assert_eq!(snap_to_step(0.34, 0.1, 10.0, 0.1), 0.3);
        assert_eq!(snap_to_step(0.0, 0.1, 10.0, 0.1), 0.1);
        assert_eq!(snap_to_step(f64::NAN, 0.1, 10.0, 0.1), 0.1);
    }

    #[test]
    fn test_repeated_distance_nudges_stay_clean() {
        let mut params = PlanetParams::unchecked(0.0, 0.1);
        for _ in 0..2 {
            params.nudge_distance(1);
        }
        assert_eq!(params.distance_au, 0.3);

        for _ in 0..200 {
            params.nudge_distance(1);
        }
        assert_eq!(params.distance_au, 10.0);

        params.nudge_distance(-1000);
        assert_eq!(params.distance_au, 0.1);
    }

    #[test]
    fn test_angle_nudges_clamp_at_domain_edges() {
        let mut params = PlanetParams::unchecked(350.0, 1.0);
        params.nudge_angle(1);
        assert_eq!(params.angle_deg, 360.0);
        params.nudge_angle(1);
        assert_eq!(params.angle_deg, 360.0);
        params.nudge_angle(-37);
        assert_eq!(params.angle_deg, 0.0);
    }

    #[test]
    fn test_quantized() {
        let q = PlanetParams::unchecked(123.0, 2.26).quantized();
        assert_eq!(q, PlanetParams::unchecked(120.0, 2.3));
    }

    #[test]
    fn test_from_position() {
        let p = PlanetParams::from_position(DVec2::new(0.0, 2.04));
        assert_eq!(p, PlanetParams::unchecked(90.0, 2.0));

        let p = PlanetParams::from_position(DVec2::new(0.5, -1.3));
        assert_eq!(p, PlanetParams::unchecked(290.0, 1.4));

        // Clicking on the star lands on the closest allowed distance
        let p = PlanetParams::from_position(DVec2::ZERO);
        assert_eq!(p, PlanetParams::unchecked(0.0, 0.1));

        // Outside the reachable disc the distance clamps
        let p = PlanetParams::from_position(DVec2::new(-10.0, -9.0));
        assert_eq!(p, PlanetParams::unchecked(220.0, 10.0));
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(get_preset("close_approach").unwrap().params.distance_au, 0.1);
        assert_eq!(
            get_preset("missing").unwrap_err(),
            ParamError::UnknownPreset("missing".into())
        );
    }

    #[test]
    fn test_matching_preset() {
        let found = matching_preset(&PlanetParams::default()).map(|p| p.id);
        assert_eq!(found, Some("default"));
        assert!(matching_preset(&PlanetParams::unchecked(10.0, 3.3)).is_none());
    }
}
