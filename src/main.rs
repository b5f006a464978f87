//! Exolens - Exoplanet Microlensing Explorer
//!
//! A desktop application showing, conceptually, how an exoplanet's position
//! shapes the light curve of a lensed background star.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use exolens::camera::CameraPlugin;
use exolens::config::{CliArgs, ConfigError};
use exolens::input::InputPlugin;
use exolens::lensing::LensingPlugin;
use exolens::mapper::evaluate;
use exolens::report;
use exolens::types::PlanetParams;
use exolens::ui::UiPlugin;

fn main() -> AppExit {
    let args = CliArgs::parse();

    match run(&args) {
        Ok(exit) => exit,
        Err(err) => {
            eprintln!("exolens: {err}");
            AppExit::from_code(2)
        }
    }
}

fn run(args: &CliArgs) -> Result<AppExit, ConfigError> {
    let params = args.initial_params()?;

    if args.report {
        print!("{}", report::render(&evaluate(params)));
        return Ok(AppExit::Success);
    }

    let level = args.log_level()?;
    Ok(explorer_app(params, level).run())
}

fn explorer_app(params: PlanetParams, level: bevy::log::Level) -> App {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Exoplanet Gravitational Lensing Simulator".into(),
                    resolution: (1280, 760).into(),
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin { level, ..default() }),
    )
    .add_plugins(EguiPlugin::default())
    // Insert parameters before plugins that depend on them
    .insert_resource(params)
    .add_plugins((CameraPlugin, LensingPlugin, InputPlugin, UiPlugin));

    info!(
        "Starting at {}° / {} AU",
        params.angle_deg, params.distance_au
    );
    app
}
