//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Reset/reload icon (circular arrow)
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
/// Parameters section header
pub const SLIDERS: &str = egui_phosphor::regular::SLIDERS_HORIZONTAL;
/// Background star
pub const STAR: &str = egui_phosphor::regular::STAR;
/// Planet/globe icon
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
/// Light-curve chart
pub const CHART: &str = egui_phosphor::regular::CHART_LINE;
/// Keyboard shortcuts
pub const KEYBOARD: &str = egui_phosphor::regular::KEYBOARD;
/// Info icon
pub const INFO: &str = egui_phosphor::regular::INFO;

// Preset icons
/// Default preset
pub const PRESET_DEFAULT: &str = egui_phosphor::regular::HOUSE;
/// Close approach preset
pub const PRESET_CLOSE: &str = egui_phosphor::regular::SUN;
/// Quarter orbit preset
pub const PRESET_QUARTER: &str = egui_phosphor::regular::CIRCLE_HALF;
/// Distant planet preset
pub const PRESET_DISTANT: &str = egui_phosphor::regular::ARROWS_OUT;

/// Icon for a preset based on its ID.
pub fn preset_icon(id: &str) -> &'static str {
    match id {
        "default" => PRESET_DEFAULT,
        "close_approach" => PRESET_CLOSE,
        "quarter_orbit" => PRESET_QUARTER,
        "distant_planet" => PRESET_DISTANT,
        _ => INFO,
    }
}
