//! Camera for the explorer window.
//!
//! Everything on screen is drawn by egui, which needs a camera to render
//! into; the world itself stays empty.

use bevy::prelude::*;

/// Clear color behind the egui panels.
pub const BACKGROUND: Color = Color::srgb(0.055, 0.055, 0.08);

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing the camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND))
            .add_systems(Startup, setup_camera);
    }
}

/// Spawn the main 2D camera.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}
