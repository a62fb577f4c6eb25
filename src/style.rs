//! Pure styling helpers for the earthquake markers and the depth legend.

use egui::Color32;

/// Marker stroke color shared by every earthquake marker
pub const MARKER_STROKE_COLOR: &str = "#000000";
/// Marker stroke width in pixels
pub const MARKER_STROKE_WIDTH: f32 = 0.5;
/// Marker fill opacity
pub const MARKER_FILL_OPACITY: f32 = 0.8;
/// Marker stroke opacity
pub const MARKER_STROKE_OPACITY: f32 = 1.0;

/// Lower boundaries of the legend depth bands, in km
pub const DEPTH_BREAKS: [f64; 6] = [-10.0, 10.0, 30.0, 50.0, 70.0, 90.0];

/// Fill colors for the depth bands, shallowest first
pub const DEPTH_COLORS: [&str; 6] = [
    "#1a9850", "#91cf60", "#d9ef8b", "#fee08b", "#fc8d59", "#d73027",
];

/// Maps an earthquake depth (km) to its band color.
///
/// Thresholds are exclusive lower bounds evaluated in descending order, so a
/// boundary value resolves to the band below it (90 km is still orange).
/// A missing depth falls through to the shallowest band, matching the
/// behavior of comparing against an absent value.
pub fn depth_color(depth: Option<f64>) -> &'static str {
    match depth {
        Some(d) if d > 90.0 => "#d73027",
        Some(d) if d > 70.0 => "#fc8d59",
        Some(d) if d > 50.0 => "#fee08b",
        Some(d) if d > 30.0 => "#d9ef8b",
        Some(d) if d > 10.0 => "#91cf60",
        _ => "#1a9850",
    }
}

/// Maps an earthquake magnitude to a marker radius in pixels.
///
/// Magnitude 0 gets a fixed radius of 1 so the marker stays visible; the
/// result is floored at 1 so a non-positive radius is never produced.
pub fn magnitude_radius(magnitude: f64) -> f64 {
    if magnitude == 0.0 {
        return 1.0;
    }
    let radius = magnitude * 4.0;
    if radius > 0.0 {
        radius
    } else {
        1.0
    }
}

/// Parses a `#rrggbb` hex color, applying `opacity` as the alpha channel
pub fn hex_color(hex: &str, opacity: f32) -> Color32 {
    let value = u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0);
    let r = ((value >> 16) & 0xff) as u8;
    let g = ((value >> 8) & 0xff) as u8;
    let b = (value & 0xff) as u8;
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}
