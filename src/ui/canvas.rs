use crate::{
    core::{
        geo::{LatLng, Point},
        map::Map,
        viewport::Viewport,
    },
    style::hex_color,
    ui::{legend::Legend, popup::PopupManager},
};
use egui::{Align2, Color32, FontId, Pos2, Rect, Response, Sense, Shape, Stroke, Ui};

/// Pixel slack added around a marker when hit-testing clicks
const CLICK_TOLERANCE: f32 = 4.0;

/// The map canvas widget. Paints the active base layer, every visible
/// overlay (plate polylines below earthquake markers), the open popups,
/// and the depth legend; handles drag-to-pan, scroll-to-zoom, and
/// click-to-open-popup.
pub struct MapCanvas<'a> {
    map: &'a mut Map,
    popups: &'a mut PopupManager,
}

impl<'a> MapCanvas<'a> {
    pub fn new(map: &'a mut Map, popups: &'a mut PopupManager) -> Self {
        Self { map, popups }
    }

    pub fn show(mut self, ui: &mut Ui) -> Response {
        let desired_size = ui.available_size();
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click_and_drag());

        self.map
            .viewport
            .set_size(Point::new(rect.width() as f64, rect.height() as f64));

        self.handle_input(ui, &response);

        let painter = ui.painter_at(rect);

        // Base layer tint and attribution
        let (tint, attribution) = match self.map.layers.active_base() {
            Some(base) => (
                hex_color(base.background(), 1.0),
                base.attribution().to_string(),
            ),
            None => (Color32::from_gray(221), String::new()),
        };
        painter.rect_filled(rect, 0.0, tint);

        // Lines below markers, matching the overlay stacking of the feeds
        for overlay in self.map.layers.overlays() {
            if !overlay.is_visible() {
                continue;
            }
            for polyline in overlay.polylines() {
                let points: Vec<Pos2> = polyline
                    .points
                    .iter()
                    .map(|p| to_screen(rect, &self.map.viewport, p))
                    .collect();
                if points.len() < 2 {
                    continue;
                }
                let stroke = Stroke::new(
                    polyline.style.width,
                    hex_color(&polyline.style.color, polyline.style.opacity),
                );
                match polyline.style.dash_pattern.as_slice() {
                    [] => {
                        painter.add(Shape::line(points, stroke));
                    }
                    [dash] => painter.extend(Shape::dashed_line(&points, stroke, *dash, *dash)),
                    [dash, gap, ..] => {
                        painter.extend(Shape::dashed_line(&points, stroke, *dash, *gap))
                    }
                }
            }
        }

        for overlay in self.map.layers.overlays() {
            if !overlay.is_visible() {
                continue;
            }
            for marker in overlay.markers() {
                let center = to_screen(rect, &self.map.viewport, &marker.position);
                if !rect.expand(40.0).contains(center) {
                    continue;
                }
                let radius = marker.style.radius as f32;
                painter.circle_filled(
                    center,
                    radius,
                    hex_color(&marker.style.fill_color, marker.style.fill_opacity),
                );
                painter.circle_stroke(
                    center,
                    radius,
                    Stroke::new(
                        marker.style.stroke_width,
                        hex_color(&marker.style.stroke_color, marker.style.stroke_opacity),
                    ),
                );
            }
        }

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                self.handle_click(pointer, rect);
            }
        }

        self.popups.paint(&painter, rect, &self.map.viewport);
        Legend::paint(&painter, rect);

        if !attribution.is_empty() {
            painter.text(
                Pos2::new(rect.left() + 4.0, rect.bottom() - 4.0),
                Align2::LEFT_BOTTOM,
                attribution,
                FontId::proportional(10.0),
                Color32::DARK_GRAY,
            );
        }

        response
    }

    fn handle_input(&mut self, ui: &Ui, response: &Response) {
        if response.dragged() {
            let delta = response.drag_delta();
            if delta.length_sq() > 0.5 {
                let viewport = &mut self.map.viewport;
                let target = Point::new(
                    viewport.size.x / 2.0 - delta.x as f64,
                    viewport.size.y / 2.0 - delta.y as f64,
                );
                let center = viewport.pixel_to_lat_lng(&target);
                viewport.set_center(center);
            }
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll.abs() > 0.1 {
                let zoom = self.map.viewport.zoom + scroll as f64 * 0.003;
                self.map.viewport.set_zoom(zoom);
            }
        }
    }

    /// Opens the popup of the topmost marker under the pointer, or closes
    /// all popups when clicking empty map
    fn handle_click(&mut self, pointer: Pos2, rect: Rect) {
        for overlay in self.map.layers.overlays() {
            if !overlay.is_visible() {
                continue;
            }
            for (index, marker) in overlay.markers().iter().enumerate().rev() {
                let center = to_screen(rect, &self.map.viewport, &marker.position);
                let hit_radius = marker.style.radius as f32 + CLICK_TOLERANCE;
                if center.distance(pointer) <= hit_radius {
                    if let Some(text) = &marker.popup {
                        self.popups.show_text_popup(
                            format!("{}-{}", overlay.id(), index),
                            marker.position,
                            text.clone(),
                        );
                    }
                    return;
                }
            }
        }

        self.popups.hide_all();
    }
}

fn to_screen(rect: Rect, viewport: &Viewport, position: &LatLng) -> Pos2 {
    let pixel = viewport.lat_lng_to_pixel(position);
    Pos2::new(rect.left() + pixel.x as f32, rect.top() + pixel.y as f32)
}
