//! Plain-text report of a snapshot, printed by `--report`.

use std::fmt::Write;

use crate::mapper::LensingSnapshot;
use crate::plot::{current_brightness_label, position_title};
use crate::types::CURRENT_SAMPLE_INDEX;

/// Render the snapshot summary followed by the light curve as `t,brightness` rows.
pub fn render(snapshot: &LensingSnapshot) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "# angle = {}°, distance = {} AU",
        snapshot.params.angle_deg, snapshot.params.distance_au
    );
    let _ = writeln!(out, "# {}", position_title(snapshot.position));
    let _ = writeln!(out, "# separation = {:.4} AU", snapshot.separation);
    let _ = writeln!(out, "# {}", current_brightness_label(snapshot.intensity));
    let _ = writeln!(
        out,
        "# time offset = {:.4}, peak time = {:.4}",
        snapshot.time_offset,
        snapshot.peak_time()
    );
    let _ = writeln!(out, "t,brightness,current");

    for (i, sample) in snapshot.curve.samples().iter().enumerate() {
        let marker = if i == CURRENT_SAMPLE_INDEX { "*" } else { "" };
        let _ = writeln!(out, "{:.6},{:.6},{marker}", sample.t, sample.brightness);
    }

    out
}
