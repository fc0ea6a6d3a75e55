//! Deterministic chart colors.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Hue step between consecutive series (golden angle, in degrees).
pub const SERIES_HUE_STEP: f64 = 137.5;

pub const BAR_FILL: &str = "rgba(54, 162, 235, 0.6)";
pub const BAR_BORDER: &str = "rgba(54, 162, 235, 1)";

/// Hue in `[0, 360)` for the series at `index`.
#[allow(clippy::cast_precision_loss)]
pub fn series_hue(index: usize) -> f64 {
    (index as f64 * SERIES_HUE_STEP) % 360.0
}

/// CSS color for the series at `index`; identical across loads.
pub fn series_color(index: usize) -> String {
    format!("hsl({}, 70%, 50%)", series_hue(index))
}
