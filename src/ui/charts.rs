//! The spatial chart and the light-curve chart.
//!
//! Both are painted directly with egui shapes inside a fixed data window
//! (see [`PlotFrame`]). Axis limits never follow the data.

use bevy_egui::egui;

use crate::mapper::LensingSnapshot;
use crate::plot::{
    PlotFrame, current_brightness_label, position_title, square_in, tick_label, ticks,
};
use crate::types::PlanetParams;

use super::colors;

/// Space left around the data rect for tick labels.
const AXIS_MARGIN: f32 = 36.0;

/// Marker radii in points.
const STAR_RADIUS: f32 = 9.0;
const PLANET_RADIUS: f32 = 6.0;
const CURRENT_RADIUS: f32 = 5.0;

/// Spatial chart: fixed star at the origin, planet at its projected position.
///
/// Returns new parameters when the user clicks or drags inside the chart.
pub fn space_chart(ui: &mut egui::Ui, snapshot: &LensingSnapshot) -> Option<PlanetParams> {
    let frame = PlotFrame::SPACE;

    ui.label(
        egui::RichText::new(position_title(snapshot.position))
            .strong()
            .color(colors::TEXT),
    );

    let side = ui.available_width().min(ui.available_height());
    let (response, painter) =
        ui.allocate_painter(egui::vec2(side, side), egui::Sense::click_and_drag());
    let data_rect = square_in(response.rect.shrink(AXIS_MARGIN / 2.0));

    draw_axes(&painter, data_rect, &frame, 5.0, 5.0, "X (AU)", "Y (AU)");

    let plot = painter.with_clip_rect(data_rect);

    let star = frame.to_screen(data_rect, 0.0, 0.0);
    plot.circle_filled(star, STAR_RADIUS, colors::STAR);

    let planet = frame.to_screen(data_rect, snapshot.position.x, snapshot.position.y);
    plot.line_segment([star, planet], egui::Stroke::new(1.0, colors::GUIDE));
    plot.circle_filled(planet, PLANET_RADIUS, colors::PLANET);

    draw_legend(
        &painter,
        data_rect,
        &[
            (colors::STAR, "Background star".to_string()),
            (colors::PLANET, "Exoplanet".to_string()),
        ],
    );

    if !(response.clicked() || response.dragged()) {
        return None;
    }

    let pos = response.interact_pointer_pos()?;
    if !data_rect.contains(pos) {
        return None;
    }

    Some(PlanetParams::from_position(frame.to_data(data_rect, pos)))
}

/// Light-curve chart with the midpoint sample highlighted.
pub fn light_curve_chart(ui: &mut egui::Ui, snapshot: &LensingSnapshot) {
    let frame = PlotFrame::LIGHT_CURVE;

    ui.label(
        egui::RichText::new("Background star brightness (simulated)")
            .strong()
            .color(colors::TEXT),
    );

    let size = egui::vec2(ui.available_width(), ui.available_width().min(ui.available_height()));
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let data_rect = response.rect.shrink(AXIS_MARGIN / 2.0);

    draw_axes(
        &painter,
        data_rect,
        &frame,
        1.0,
        1.0,
        "Time (virtual)",
        "Relative brightness",
    );

    // Curve can exceed the window when intensity is at the ceiling
    let plot = painter.with_clip_rect(data_rect);

    let points: Vec<egui::Pos2> = snapshot
        .curve
        .samples()
        .iter()
        .map(|s| frame.to_screen(data_rect, s.t, s.brightness))
        .collect();
    plot.add(egui::Shape::line(points, egui::Stroke::new(2.0, colors::CURVE)));

    let current = snapshot.current();
    let marker = frame.to_screen(data_rect, current.t, current.brightness);
    plot.circle_filled(marker, CURRENT_RADIUS, colors::CURRENT);

    if let Some(pos) = response.hover_pos() {
        let data = frame.to_data(data_rect, pos);
        if frame.contains(data.x, data.y) {
            response.on_hover_text(format!("t = {:.2}", data.x));
        }
    }

    draw_legend(
        &painter,
        data_rect,
        &[(colors::CURRENT, current_brightness_label(snapshot.intensity))],
    );
}

/// Background, grid, tick labels and axis titles.
fn draw_axes(
    painter: &egui::Painter,
    rect: egui::Rect,
    frame: &PlotFrame,
    x_step: f64,
    y_step: f64,
    x_title: &str,
    y_title: &str,
) {
    painter.rect_filled(rect, 0.0, colors::CHART_BG);

    let grid = egui::Stroke::new(1.0, colors::GRID);
    let font = egui::FontId::proportional(11.0);

    for x in ticks(frame.x.0, frame.x.1, x_step) {
        let top = frame.to_screen(rect, x, frame.y.1);
        let bottom = frame.to_screen(rect, x, frame.y.0);
        painter.line_segment([top, bottom], grid);
        painter.text(
            bottom + egui::vec2(0.0, 3.0),
            egui::Align2::CENTER_TOP,
            tick_label(x),
            font.clone(),
            colors::TEXT_DIM,
        );
    }

    for y in ticks(frame.y.0, frame.y.1, y_step) {
        let left = frame.to_screen(rect, frame.x.0, y);
        let right = frame.to_screen(rect, frame.x.1, y);
        painter.line_segment([left, right], grid);
        painter.text(
            left - egui::vec2(3.0, 0.0),
            egui::Align2::RIGHT_CENTER,
            tick_label(y),
            font.clone(),
            colors::TEXT_DIM,
        );
    }

    painter.text(
        egui::pos2(rect.center().x, rect.bottom() + 16.0),
        egui::Align2::CENTER_TOP,
        x_title,
        font.clone(),
        colors::TEXT_DIM,
    );
    painter.text(
        egui::pos2(rect.left() + 4.0, rect.top() + 4.0),
        egui::Align2::LEFT_TOP,
        y_title,
        font,
        colors::TEXT_DIM,
    );
}

/// Legend box in the top-right corner of the data rect.
fn draw_legend(painter: &egui::Painter, rect: egui::Rect, entries: &[(egui::Color32, String)]) {
    let font = egui::FontId::proportional(12.0);
    let line_height = 16.0;
    let mut y = rect.top() + 10.0;

    for (color, text) in entries {
        let anchor = egui::pos2(rect.right() - 10.0, y);
        let galley = painter.layout_no_wrap(text.clone(), font.clone(), colors::TEXT);
        let text_pos = anchor - egui::vec2(galley.size().x, 0.0);
        painter.circle_filled(
            text_pos + egui::vec2(-9.0, galley.size().y / 2.0),
            4.0,
            *color,
        );
        painter.galley(text_pos, galley, colors::TEXT);
        y += line_height;
    }
}
