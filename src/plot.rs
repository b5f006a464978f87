//! Chart geometry shared by the spatial plot and the light-curve plot.
//!
//! Pure functions only: data windows, data→screen transforms, grid ticks
//! and the text shown in chart titles and legends.

use bevy::math::DVec2;
use bevy_egui::egui;

use crate::types::{CURVE_BRIGHTNESS_WINDOW, CURVE_TIME_WINDOW, SPACE_WINDOW};

/// Fixed data window of a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotFrame {
    /// Horizontal data range (min, max)
    pub x: (f64, f64),
    /// Vertical data range (min, max)
    pub y: (f64, f64),
}

impl PlotFrame {
    /// Window of the spatial plot: [-10, 10] AU on both axes.
    pub const SPACE: PlotFrame = PlotFrame {
        x: SPACE_WINDOW,
        y: SPACE_WINDOW,
    };

    /// Window of the light-curve plot: t in [0, 10], brightness in [0.8, 6].
    pub const LIGHT_CURVE: PlotFrame = PlotFrame {
        x: CURVE_TIME_WINDOW,
        y: CURVE_BRIGHTNESS_WINDOW,
    };

    pub fn width(&self) -> f64 {
        self.x.1 - self.x.0
    }

    pub fn height(&self) -> f64 {
        self.y.1 - self.y.0
    }

    /// Whether a data point lies inside the window (edges included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x.0..=self.x.1).contains(&x) && (self.y.0..=self.y.1).contains(&y)
    }

    /// Map a data point into `rect`, with the data y axis pointing up.
    pub fn to_screen(&self, rect: egui::Rect, x: f64, y: f64) -> egui::Pos2 {
        let fx = (x - self.x.0) / self.width();
        let fy = (y - self.y.0) / self.height();
        egui::pos2(
            rect.left() + fx as f32 * rect.width(),
            rect.bottom() - fy as f32 * rect.height(),
        )
    }

    /// Inverse of [`PlotFrame::to_screen`].
    pub fn to_data(&self, rect: egui::Rect, pos: egui::Pos2) -> DVec2 {
        let fx = ((pos.x - rect.left()) / rect.width()) as f64;
        let fy = ((rect.bottom() - pos.y) / rect.height()) as f64;
        DVec2::new(self.x.0 + fx * self.width(), self.y.0 + fy * self.height())
    }
}

/// Largest square of `rect` centred in it, used for equal-aspect charts.
pub fn square_in(rect: egui::Rect) -> egui::Rect {
    let side = rect.width().min(rect.height());
    egui::Rect::from_center_size(rect.center(), egui::vec2(side, side))
}

/// Grid positions that are multiples of `step` inside `[min, max]`.
pub fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || min > max {
        return Vec::new();
    }

    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Axis label for a tick value, dropping needless decimals.
pub fn tick_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

/// Title of the spatial chart.
pub fn position_title(position: DVec2) -> String {
    format!("Planet position: ({:.2}, {:.2}) AU", position.x, position.y)
}

/// Legend entry of the highlighted light-curve sample.
pub fn current_brightness_label(intensity: f64) -> String {
    format!("Current brightness: {intensity:.2}")
}
