//! Exolens - Exoplanet Microlensing Explorer
//!
//! A library crate providing the parameter-to-light-curve mapping and the
//! Bevy plugins that drive the interactive explorer.

pub mod camera;
pub mod config;
pub mod input;
pub mod lensing;
pub mod mapper;
pub mod params;
pub mod plot;
pub mod report;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
