use crate::core::geo::{LatLng, LatLngBounds, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator projection constants
const EARTH_RADIUS: f64 = 6378137.0;
const MAX_LATITUDE: f64 = 85.0511287798;

/// Pixel padding kept around fitted bounds
const FIT_BOUNDS_PADDING: f64 = 20.0;

/// Manages the current view of the map: center, zoom, and screen dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(0.0, 18.0),
            size,
            min_zoom: 0.0,
            max_zoom: 18.0,
        }
    }

    /// Sets the center of the viewport
    pub fn set_center(&mut self, center: LatLng) {
        self.center = center;
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Projects a LatLng to world pixel coordinates at the given zoom level
    /// using the standard Web Mercator projection (EPSG:3857)
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        let z = zoom.unwrap_or(self.zoom);
        let scale = 256.0 * 2_f64.powf(z);

        let lat = lat_lng.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        let x = lat_lng.lng.to_radians() * EARTH_RADIUS;
        let y = ((PI / 4.0 + lat.to_radians() / 2.0).tan().ln()) * EARTH_RADIUS;

        let pixel_x = (x + PI * EARTH_RADIUS) / (2.0 * PI * EARTH_RADIUS) * scale;
        let pixel_y = (-y + PI * EARTH_RADIUS) / (2.0 * PI * EARTH_RADIUS) * scale;

        Point::new(pixel_x, pixel_y)
    }

    /// Unprojects world pixel coordinates back to LatLng at the given zoom level
    pub fn unproject(&self, pixel: &Point, zoom: Option<f64>) -> LatLng {
        let z = zoom.unwrap_or(self.zoom);
        let scale = 256.0 * 2_f64.powf(z);

        let x = (pixel.x / scale) * (2.0 * PI * EARTH_RADIUS) - PI * EARTH_RADIUS;
        let y = PI * EARTH_RADIUS - (pixel.y / scale) * (2.0 * PI * EARTH_RADIUS);

        let lng = (x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();

        LatLng::new(lat, lng)
    }

    /// Converts a geographical coordinate to a screen pixel position,
    /// relative to the top-left corner of the viewport
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        let world = self.project(lat_lng, None);
        let center = self.project(&self.center, None);
        world
            .subtract(&center)
            .add(&Point::new(self.size.x / 2.0, self.size.y / 2.0))
    }

    /// Converts a screen pixel position back to a geographical coordinate
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        let center = self.project(&self.center, None);
        let world = center.add(&pixel.subtract(&Point::new(
            self.size.x / 2.0,
            self.size.y / 2.0,
        )));
        self.unproject(&world, None)
    }

    /// Gets the geographical bounds currently visible in the viewport
    pub fn bounds(&self) -> LatLngBounds {
        let north_west = self.pixel_to_lat_lng(&Point::new(0.0, 0.0));
        let south_east = self.pixel_to_lat_lng(&Point::new(self.size.x, self.size.y));

        LatLngBounds::new(
            LatLng::new(south_east.lat, north_west.lng),
            LatLng::new(north_west.lat, south_east.lng),
        )
    }

    /// Computes the highest zoom level at which the given bounds fit the
    /// viewport with the given pixel padding on every side
    pub fn bounds_zoom(&self, bounds: &LatLngBounds, padding: f64) -> f64 {
        let sw = self.project(&bounds.south_west, Some(0.0));
        let ne = self.project(&bounds.north_east, Some(0.0));
        let span_x = (ne.x - sw.x).abs();
        let span_y = (sw.y - ne.y).abs();

        let avail_x = (self.size.x - 2.0 * padding).max(1.0);
        let avail_y = (self.size.y - 2.0 * padding).max(1.0);

        let zoom_x = if span_x > 0.0 {
            (avail_x / span_x).log2()
        } else {
            self.max_zoom
        };
        let zoom_y = if span_y > 0.0 {
            (avail_y / span_y).log2()
        } else {
            self.max_zoom
        };

        zoom_x.min(zoom_y).clamp(self.min_zoom, self.max_zoom)
    }

    /// Centers the viewport on the given bounds at the highest zoom that
    /// keeps them fully visible.
    ///
    /// Centering happens on the projected midpoint, not the geographic one,
    /// so that the Mercator-stretched northern half cannot overflow the view.
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        let sw = self.project(&bounds.south_west, Some(0.0));
        let ne = self.project(&bounds.north_east, Some(0.0));
        let mid = Point::new((sw.x + ne.x) / 2.0, (sw.y + ne.y) / 2.0);
        self.set_center(self.unproject(&mid, Some(0.0)));

        let zoom = self.bounds_zoom(bounds, FIT_BOUNDS_PADDING);
        self.set_zoom(zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(LatLng::new(20.0, 0.0), 2.0, Point::new(800.0, 600.0))
    }

    #[test]
    fn test_project_unproject_roundtrip() {
        let vp = viewport();
        let coord = LatLng::new(37.7749, -122.4194);

        let world = vp.project(&coord, None);
        let back = vp.unproject(&world, None);

        assert!((back.lat - coord.lat).abs() < 1e-6);
        assert!((back.lng - coord.lng).abs() < 1e-6);
    }

    #[test]
    fn test_center_maps_to_screen_center() {
        let vp = viewport();
        let pixel = vp.lat_lng_to_pixel(&vp.center);

        assert!((pixel.x - 400.0).abs() < 1e-6);
        assert!((pixel.y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_viewport_bounds_contain_center() {
        let vp = viewport();
        let bounds = vp.bounds();

        assert!(bounds.contains(&vp.center));
        assert!(bounds.south_west.lat < bounds.north_east.lat);
        assert!(bounds.south_west.lng < bounds.north_east.lng);
    }

    #[test]
    fn test_fit_bounds_centers_and_contains() {
        let mut vp = viewport();
        let bounds = LatLngBounds::from_coords(30.0, -10.0, 50.0, 20.0);

        vp.fit_bounds(&bounds);

        assert!((vp.center.lng - bounds.center().lng).abs() < 1e-6);
        let visible = vp.bounds();
        assert!(visible.contains(&bounds.south_west));
        assert!(visible.contains(&bounds.north_east));
    }

    #[test]
    fn test_fit_degenerate_bounds_clamps_zoom() {
        let mut vp = viewport();
        let point = LatLng::new(10.0, 10.0);
        let bounds = LatLngBounds::new(point, point);

        vp.fit_bounds(&bounds);

        assert_eq!(vp.zoom, vp.max_zoom);
        assert!((vp.center.lat - point.lat).abs() < 1e-6);
        assert!((vp.center.lng - point.lng).abs() < 1e-6);
    }
}
