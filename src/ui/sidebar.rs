//! Parameter sidebar on the left edge of the window.
//!
//! Holds the two sliders, preset buttons, a reset button and a readout of
//! the current snapshot.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::input::KeyboardCapture;
use crate::lensing::{LoadPresetMessage, ResetParamsMessage};
use crate::mapper::LensingSnapshot;
use crate::params::{PRESETS, matching_preset};
use crate::types::{
    ANGLE_MAX_DEG, ANGLE_MIN_DEG, ANGLE_STEP_DEG, DISTANCE_MAX_AU, DISTANCE_MIN_AU,
    DISTANCE_STEP_AU, PlanetParams,
};

use super::{colors, icons};

/// System that renders the parameter sidebar.
pub fn sidebar_system(
    mut contexts: EguiContexts,
    mut params: ResMut<PlanetParams>,
    snapshot: Res<LensingSnapshot>,
    mut capture: ResMut<KeyboardCapture>,
    mut load_preset: MessageWriter<LoadPresetMessage>,
    mut reset: MessageWriter<ResetParamsMessage>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    capture.egui_wants_keyboard = ctx.wants_keyboard_input();

    egui::SidePanel::left("parameters")
        .resizable(false)
        .default_width(250.0)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(14)),
        )
        .show(ctx, |ui| {
            ui.heading(format!("{} Parameters", icons::SLIDERS));
            ui.add_space(8.0);

            render_sliders(ui, &mut params);

            ui.add_space(8.0);
            ui.separator();

            if let Some(id) = render_presets(ui, &params) {
                load_preset.write(LoadPresetMessage { preset_id: id });
            }

            ui.add_space(4.0);
            let reset_button = egui::Button::new(format!("{} Reset", icons::RESET));
            if ui.add(reset_button).on_hover_text("Restore defaults (R)").clicked() {
                reset.write(ResetParamsMessage);
            }

            ui.add_space(8.0);
            ui.separator();

            render_readout(ui, &snapshot);

            ui.add_space(8.0);
            ui.separator();

            render_shortcuts(ui);
        });
}

/// Angle and distance sliders. Only writes back when a value changed so
/// the snapshot is not recomputed every frame.
fn render_sliders(ui: &mut egui::Ui, params: &mut ResMut<PlanetParams>) {
    let mut angle = params.angle_deg;
    let mut distance = params.distance_au;

    ui.label(egui::RichText::new("Planet angle (deg)").color(colors::TEXT));
    let angle_changed = ui
        .add(
            egui::Slider::new(&mut angle, ANGLE_MIN_DEG..=ANGLE_MAX_DEG)
                .step_by(ANGLE_STEP_DEG)
                .fixed_decimals(0)
                .suffix("°"),
        )
        .changed();

    ui.add_space(4.0);

    ui.label(egui::RichText::new("Planet distance (AU)").color(colors::TEXT));
    let distance_changed = ui
        .add(
            egui::Slider::new(&mut distance, DISTANCE_MIN_AU..=DISTANCE_MAX_AU)
                .step_by(DISTANCE_STEP_AU)
                .fixed_decimals(1)
                .suffix(" AU"),
        )
        .changed();

    if angle_changed || distance_changed {
        // Slider steps can leave float noise (0.30000000000000004)
        let next = PlanetParams::unchecked(angle, distance).quantized();
        if params.set_if_neq(next) {
            debug!("Sliders: {}° at {} AU", next.angle_deg, next.distance_au);
        }
    }
}

/// Preset buttons. Returns the id of the preset clicked this frame.
fn render_presets(ui: &mut egui::Ui, params: &PlanetParams) -> Option<&'static str> {
    let current = matching_preset(params).map(|p| p.id);
    let mut clicked = None;

    ui.label(egui::RichText::new("Presets").color(colors::TEXT_DIM));
    for (i, preset) in PRESETS.iter().enumerate() {
        let label = format!("{} {}", icons::preset_icon(preset.id), preset.name);
        let response = ui
            .selectable_label(current == Some(preset.id), label)
            .on_hover_text(format!("{} ({})", preset.description, i + 1));
        if response.clicked() {
            clicked = Some(preset.id);
        }
    }

    clicked
}

/// Numbers behind the two charts.
fn render_readout(ui: &mut egui::Ui, snapshot: &LensingSnapshot) {
    egui::Grid::new("readout")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            let mut row = |name: &str, value: String| {
                ui.label(egui::RichText::new(name).color(colors::TEXT_DIM));
                ui.label(egui::RichText::new(value).monospace().color(colors::TEXT));
                ui.end_row();
            };

            row(
                "Position",
                format!("({:.2}, {:.2}) AU", snapshot.position.x, snapshot.position.y),
            );
            row("Separation", format!("{:.2} AU", snapshot.separation));
            row("Intensity", format!("{:.2}", snapshot.intensity));
            row("Peak time", format!("{:.2}", snapshot.peak_time()));
            row(
                "Current",
                format!(
                    "t={:.2}, {:.3}",
                    snapshot.current().t,
                    snapshot.current().brightness
                ),
            );
        });
}

/// Keyboard shortcut help.
fn render_shortcuts(ui: &mut egui::Ui) {
    ui.collapsing(format!("{} Shortcuts", icons::KEYBOARD), |ui| {
        for (keys, action) in [
            ("← / →", "Angle ∓10°"),
            ("↓ / ↑", "Distance ∓0.1 AU"),
            ("Shift + ↓ / ↑", "Distance ∓1 AU"),
            ("1-4", "Presets"),
            ("R", "Reset"),
            ("Click chart", "Place planet"),
        ] {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(keys).monospace().color(colors::TEXT));
                ui.label(egui::RichText::new(action).color(colors::TEXT_DIM));
            });
        }
    });
}
