use crate::{
    core::{
        geo::{LatLng, LatLngBounds, Point},
        viewport::Viewport,
    },
    layers::registry::LayerRegistry,
};

/// The map widget state: a viewport plus the registered layer set.
/// Construction always succeeds; the canvas renders whatever is registered.
pub struct Map {
    pub viewport: Viewport,
    pub layers: LayerRegistry,
}

impl Map {
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            viewport: Viewport::new(center, zoom, size),
            layers: LayerRegistry::new(),
        }
    }

    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.viewport.set_center(center);
        self.viewport.set_zoom(zoom);
    }

    pub fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        self.viewport.fit_bounds(bounds);
    }

    /// Animates the viewport to the bounding box of the named overlay's
    /// current members, falling back to the present viewport bounds when
    /// the overlay is empty or unknown. Best-effort: an empty overlay
    /// leaves the view where it is.
    pub fn fit_overlay_bounds(&mut self, overlay_id: &str) {
        let bounds = self
            .layers
            .overlay(overlay_id)
            .and_then(|overlay| overlay.bounds())
            .unwrap_or_else(|| self.viewport.bounds());
        self.fit_bounds(&bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::overlay::{CircleMarker, MarkerStyle, OverlayLayer};

    fn map() -> Map {
        let mut map = Map::new(LatLng::new(20.0, 0.0), 2.0, Point::new(800.0, 600.0));
        map.layers
            .add_overlay(OverlayLayer::new("earthquakes", "Earthquakes"));
        map
    }

    #[test]
    fn test_set_view() {
        let mut map = map();
        map.set_view(LatLng::new(35.0, 139.0), 8.0);
        assert_eq!(map.viewport.center, LatLng::new(35.0, 139.0));
        assert_eq!(map.viewport.zoom, 8.0);
    }

    #[test]
    fn test_fit_overlay_bounds_frames_markers() {
        let mut map = map();
        if let Some(overlay) = map.layers.overlay_mut("earthquakes") {
            overlay.set_markers(vec![
                CircleMarker::new(
                    LatLng::new(34.0, -118.0),
                    MarkerStyle::earthquake("#1a9850", 4.0),
                ),
                CircleMarker::new(
                    LatLng::new(61.0, -150.0),
                    MarkerStyle::earthquake("#fc8d59", 20.0),
                ),
            ]);
        }

        map.fit_overlay_bounds("earthquakes");

        let visible = map.viewport.bounds();
        assert!(visible.contains(&LatLng::new(34.0, -118.0)));
        assert!(visible.contains(&LatLng::new(61.0, -150.0)));
    }

    #[test]
    fn test_fit_empty_overlay_keeps_current_view() {
        let mut map = map();
        let center_before = map.viewport.center;

        map.fit_overlay_bounds("earthquakes");

        // Falls back to the viewport's own bounds, so the view stays put
        assert!((map.viewport.center.lat - center_before.lat).abs() < 1e-6);
        assert!((map.viewport.center.lng - center_before.lng).abs() < 1e-6);
    }

    #[test]
    fn test_fit_unknown_overlay_keeps_current_view() {
        let mut map = map();
        let center_before = map.viewport.center;

        map.fit_overlay_bounds("no-such-overlay");

        assert!((map.viewport.center.lng - center_before.lng).abs() < 1e-6);
    }
}
