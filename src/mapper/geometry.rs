//! Planet placement around the fixed background star.
//!
//! The star sits at the origin and the planet's polar radius is the
//! distance parameter, so the separation returned here always equals
//! that distance whatever the angle.

use bevy::math::DVec2;

use crate::types::DEG_TO_RAD;

/// Convert an angle in degrees to radians.
///
/// Any real input is accepted; values outside [0, 360] wrap naturally
/// once they pass through the trigonometric functions.
#[inline]
pub fn deg_to_rad(angle_deg: f64) -> f64 {
    angle_deg * DEG_TO_RAD
}

/// Project the planet's polar coordinates onto the sky plane.
///
/// # Arguments
/// * `angle_deg` - Orbital angle in degrees, counter-clockwise from +x
/// * `distance_au` - Distance from the star in AU (0 gives the origin)
///
/// # Returns
/// Planet position in AU relative to the background star
pub fn project(angle_deg: f64, distance_au: f64) -> DVec2 {
    let rad = deg_to_rad(angle_deg);
    DVec2::new(distance_au * rad.cos(), distance_au * rad.sin())
}

/// Euclidean distance between the star (origin) and a planet position.
#[inline]
pub fn separation(position: DVec2) -> f64 {
    (position.x * position.x + position.y * position.y).sqrt()
}
