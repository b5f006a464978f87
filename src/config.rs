//! Launch configuration from the command line.
//!
//! CLI values override the defaults: a preset provides the starting point,
//! then `--angle`/`--distance` override its fields individually.

use bevy::log::Level;
use clap::Parser;

use crate::params::{ParamError, get_preset};
use crate::types::PlanetParams;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    Params(#[from] ParamError),

    #[error("invalid log level '{0}' (expected error, warn, info, debug or trace)")]
    LogLevel(String),
}

/// Exoplanet microlensing explorer command-line arguments.
#[derive(Parser, Debug, Default)]
#[command(
    name = "exolens",
    about = "Conceptual exoplanet gravitational-lensing explorer",
    allow_negative_numbers = true
)]
pub struct CliArgs {
    /// Initial planet angle in degrees [0, 360].
    #[arg(long)]
    pub angle: Option<f64>,

    /// Initial planet distance in AU [0.1, 10].
    #[arg(long)]
    pub distance: Option<f64>,

    /// Start from a named preset (default, close_approach, quarter_orbit, distant_planet).
    #[arg(long)]
    pub preset: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the computed light curve and exit without opening a window.
    #[arg(long)]
    pub report: bool,
}

impl CliArgs {
    /// Starting parameters after applying preset and overrides.
    pub fn initial_params(&self) -> Result<PlanetParams, ConfigError> {
        let base = match self.preset.as_deref() {
            Some(id) => get_preset(id)?.params,
            None => PlanetParams::default(),
        };

        let params = PlanetParams::new(
            self.angle.unwrap_or(base.angle_deg),
            self.distance.unwrap_or(base.distance_au),
        )?;
        Ok(params)
    }

    /// Log level requested on the command line, `INFO` when absent.
    pub fn log_level(&self) -> Result<Level, ConfigError> {
        match self.log_level.as_deref() {
            None => Ok(Level::INFO),
            Some(raw) => raw
                .parse::<Level>()
                .map_err(|_| ConfigError::LogLevel(raw.to_string())),
        }
    }
}
