//! Keyboard shortcuts for adjusting the planet parameters.
//!
//! - ←/→ change the angle by one slider step (10°)
//! - ↓/↑ change the distance by one slider step (0.1 AU), Shift for 1 AU
//! - R restores the defaults, 1-4 load presets

use bevy::prelude::*;

use crate::lensing::{LoadPresetMessage, ResetParamsMessage};
use crate::params::PRESETS;
use crate::types::{LensingSystemSet, PlanetParams};

/// Distance steps taken per key press while Shift is held.
const COARSE_DISTANCE_STEPS: i32 = 10;

/// Resource mirroring whether egui currently consumes keyboard input.
///
/// Written by the UI each frame; shortcuts are ignored while a text field
/// or slider has focus.
#[derive(Resource, Default)]
pub struct KeyboardCapture {
    pub egui_wants_keyboard: bool,
}

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyboardCapture>()
            .add_systems(Update, keyboard_shortcuts.in_set(LensingSystemSet::Input));
    }
}

/// Handle keyboard shortcuts for parameter control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    capture: Res<KeyboardCapture>,
    mut params: ResMut<PlanetParams>,
    mut load_preset: MessageWriter<LoadPresetMessage>,
    mut reset: MessageWriter<ResetParamsMessage>,
) {
    if capture.egui_wants_keyboard {
        return;
    }

    let mut next = *params;

    if keys.just_pressed(KeyCode::ArrowRight) {
        next.nudge_angle(1);
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        next.nudge_angle(-1);
    }

    let shift = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
    let distance_steps = if shift { COARSE_DISTANCE_STEPS } else { 1 };

    if keys.just_pressed(KeyCode::ArrowUp) {
        next.nudge_distance(distance_steps);
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        next.nudge_distance(-distance_steps);
    }

    if params.set_if_neq(next) {
        info!(
            "Planet moved to {}° at {} AU",
            params.angle_deg, params.distance_au
        );
    }

    // R: reset to defaults
    if keys.just_pressed(KeyCode::KeyR) {
        reset.write(ResetParamsMessage);
    }

    // Quick preset selection with number keys
    let digits = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4];
    for (key, preset) in digits.iter().zip(PRESETS) {
        if keys.just_pressed(*key) {
            load_preset.write(LoadPresetMessage {
                preset_id: preset.id,
            });
        }
    }
}
