use crate::core::geo::{LatLng, LatLngBounds};
use crate::style;
use serde::{Deserialize, Serialize};

/// Style for circle markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Fill color as a `#rrggbb` hex string
    pub fill_color: String,
    /// Marker radius in pixels
    pub radius: f64,
    /// Border color as a `#rrggbb` hex string
    pub stroke_color: String,
    /// Border width
    pub stroke_width: f32,
    /// Fill opacity (0.0 to 1.0)
    pub fill_opacity: f32,
    /// Stroke opacity (0.0 to 1.0)
    pub stroke_opacity: f32,
}

impl MarkerStyle {
    /// The fixed earthquake marker styling: black hairline stroke and a
    /// depth/magnitude-derived fill
    pub fn earthquake(fill_color: &str, radius: f64) -> Self {
        Self {
            fill_color: fill_color.to_string(),
            radius,
            stroke_color: style::MARKER_STROKE_COLOR.to_string(),
            stroke_width: style::MARKER_STROKE_WIDTH,
            fill_opacity: style::MARKER_FILL_OPACITY,
            stroke_opacity: style::MARKER_STROKE_OPACITY,
        }
    }
}

/// Style for line features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Line color as a `#rrggbb` hex string
    pub color: String,
    /// Line width
    pub width: f32,
    /// Opacity (0.0 to 1.0)
    pub opacity: f32,
    /// Line dash pattern (empty for solid line)
    pub dash_pattern: Vec<f32>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "#3388ff".to_string(),
            width: 3.0,
            opacity: 1.0,
            dash_pattern: Vec::new(),
        }
    }
}

/// A circle marker pinned to a geographical position, optionally carrying
/// popup text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMarker {
    pub position: LatLng,
    pub style: MarkerStyle,
    pub popup: Option<String>,
}

impl CircleMarker {
    pub fn new(position: LatLng, style: MarkerStyle) -> Self {
        Self {
            position,
            style,
            popup: None,
        }
    }

    pub fn with_popup(mut self, text: impl Into<String>) -> Self {
        self.popup = Some(text.into());
        self
    }
}

/// A styled line path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<LatLng>,
    pub style: LineStyle,
}

impl Polyline {
    pub fn new(points: Vec<LatLng>, style: LineStyle) -> Self {
        Self { points, style }
    }
}

/// A named, independently toggleable overlay group holding point markers
/// and line features. Members are added once and never removed; the group
/// lives for the whole session.
pub struct OverlayLayer {
    id: String,
    name: String,
    visible: bool,
    markers: Vec<CircleMarker>,
    polylines: Vec<Polyline>,
}

impl OverlayLayer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            visible: true,
            markers: Vec::new(),
            polylines: Vec::new(),
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }

    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    pub fn set_markers(&mut self, markers: Vec<CircleMarker>) {
        self.markers = markers;
    }

    pub fn set_polylines(&mut self, polylines: Vec<Polyline>) {
        self.polylines = polylines;
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.polylines.is_empty()
    }

    /// The tightest bounds enclosing every member of the group, or `None`
    /// when the group is empty
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;

        let mut extend = |b: LatLngBounds| {
            bounds = Some(match bounds.take() {
                Some(existing) => existing.union(&b),
                None => b,
            });
        };

        for marker in &self.markers {
            extend(LatLngBounds::new(marker.position, marker.position));
        }
        for polyline in &self.polylines {
            if let Some(b) = LatLngBounds::from_points(&polyline.points) {
                extend(b);
            }
        }

        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_creation() {
        let overlay = OverlayLayer::new("earthquakes", "Earthquakes");
        assert_eq!(overlay.id(), "earthquakes");
        assert_eq!(overlay.name(), "Earthquakes");
        assert!(overlay.is_visible());
        assert!(overlay.is_empty());
        assert!(overlay.bounds().is_none());
    }

    #[test]
    fn test_overlay_bounds_over_markers() {
        let mut overlay = OverlayLayer::new("earthquakes", "Earthquakes");
        overlay.set_markers(vec![
            CircleMarker::new(LatLng::new(10.0, 20.0), MarkerStyle::earthquake("#1a9850", 4.0)),
            CircleMarker::new(LatLng::new(-5.0, 40.0), MarkerStyle::earthquake("#d73027", 8.0)),
        ]);

        let bounds = overlay.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(-5.0, 20.0));
        assert_eq!(bounds.north_east, LatLng::new(10.0, 40.0));
    }

    #[test]
    fn test_overlay_bounds_include_polylines() {
        let mut overlay = OverlayLayer::new("plates", "Tectonic Plates");
        overlay.set_polylines(vec![Polyline::new(
            vec![LatLng::new(0.0, 0.0), LatLng::new(30.0, -60.0)],
            LineStyle::default(),
        )]);

        let bounds = overlay.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(0.0, -60.0));
        assert_eq!(bounds.north_east, LatLng::new(30.0, 0.0));
    }

    #[test]
    fn test_earthquake_marker_style() {
        let style = MarkerStyle::earthquake("#fc8d59", 12.0);
        assert_eq!(style.stroke_color, "#000000");
        assert_eq!(style.stroke_width, 0.5);
        assert_eq!(style.fill_opacity, 0.8);
        assert_eq!(style.stroke_opacity, 1.0);
        assert_eq!(style.radius, 12.0);
    }
}
