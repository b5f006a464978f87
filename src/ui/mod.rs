//! UI module providing the egui-based interface.
//!
//! Layout: parameter sidebar on the left, page title and the two charts
//! side by side in the central panel, a short disclaimer underneath.

mod charts;
pub mod icons;
mod sidebar;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::mapper::LensingSnapshot;
use crate::types::PlanetParams;

/// Colors for the interface.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 240);
    pub const PAGE_BG: Color32 = Color32::from_rgb(14, 14, 20);
    pub const CHART_BG: Color32 = Color32::from_rgb(20, 20, 30);
    pub const GRID: Color32 = Color32::from_rgb(48, 48, 60);
    pub const GUIDE: Color32 = Color32::from_rgb(80, 80, 96);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const TEXT_DIM: Color32 = Color32::from_rgb(150, 150, 165);
    pub const STAR: Color32 = Color32::from_rgb(255, 215, 0);
    pub const PLANET: Color32 = Color32::from_rgb(169, 169, 169);
    pub const CURVE: Color32 = Color32::from_rgb(85, 153, 255);
    pub const CURRENT: Color32 = Color32::from_rgb(224, 70, 70);
}

const TITLE: &str = "Exoplanet Gravitational Lensing Simulator";

const DESCRIPTION: &str = "This simulator shows gravitational lensing by an exoplanet \
    **conceptually**. Adjust the planet angle and distance to see how the \
    background star's brightness changes.";

const DISCLAIMER: &str = "Note: this is a conceptual illustration only. Real lensing light \
    curves come from physical models (Einstein rings, microlensing events) built on the \
    lens equation.";

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            // Side panel has to claim its space before the central panel
            .add_systems(
                EguiPrimaryContextPass,
                (sidebar::sidebar_system, main_panel_system)
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// System that renders the title, both charts and the disclaimer.
fn main_panel_system(
    mut contexts: EguiContexts,
    snapshot: Res<LensingSnapshot>,
    mut params: ResMut<PlanetParams>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default()
        .frame(
            egui::Frame::NONE
                .fill(colors::PAGE_BG)
                .inner_margin(egui::Margin::same(16)),
        )
        .show(ctx, |ui| {
            ui.heading(egui::RichText::new(format!("{TITLE} {}", icons::STAR)).color(colors::TEXT));
            ui.label(render_markdown_bold(DESCRIPTION));
            ui.add_space(8.0);

            // Leave room for the disclaimer below the charts
            let chart_height = (ui.available_height() - 60.0).max(200.0);

            let mut picked = None;
            ui.columns(2, |columns| {
                columns[0].set_max_height(chart_height);
                columns[0].label(
                    egui::RichText::new(format!("{} Exoplanet and background star", icons::PLANET))
                        .size(16.0)
                        .color(colors::TEXT),
                );
                picked = charts::space_chart(&mut columns[0], &snapshot);

                columns[1].set_max_height(chart_height);
                columns[1].label(
                    egui::RichText::new(format!("{} Background star brightness", icons::CHART))
                        .size(16.0)
                        .color(colors::TEXT),
                );
                charts::light_curve_chart(&mut columns[1], &snapshot);
            });

            if let Some(next) = picked
                && params.set_if_neq(next)
            {
                info!("Planet placed at {}° / {} AU", next.angle_deg, next.distance_au);
            }

            ui.separator();
            ui.label(render_markdown_bold(DISCLAIMER));
        });
}

/// Turn `**bold**` spans into an egui layout job.
fn render_markdown_bold(text: &str) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    let plain = egui::TextFormat {
        color: colors::TEXT_DIM,
        ..Default::default()
    };
    let bold = egui::TextFormat {
        color: colors::TEXT,
        ..Default::default()
    };

    for (i, part) in text.split("**").enumerate() {
        let format = if i % 2 == 1 { bold.clone() } else { plain.clone() };
        job.append(part, 0.0, format);
    }

    job
}
