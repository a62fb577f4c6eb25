use crate::core::{geo::LatLng, viewport::Viewport};
use egui::{Color32, FontId, Painter, Pos2, Rect, Vec2};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct PopupStyle {
    pub background_color: Color32,
    pub border_color: Color32,
    pub border_width: f32,
    pub rounding: f32,
    pub padding: f32,
    pub font_id: FontId,
    pub text_color: Color32,
}

impl Default for PopupStyle {
    fn default() -> Self {
        Self {
            background_color: Color32::WHITE,
            border_color: Color32::GRAY,
            border_width: 1.0,
            rounding: 4.0,
            padding: 8.0,
            font_id: FontId::proportional(12.0),
            text_color: Color32::BLACK,
        }
    }
}

/// A text popup anchored to a geographical position. Content uses `<br>`
/// separators, which are rendered as line breaks.
pub struct Popup {
    pub id: String,
    pub position: LatLng,
    pub content: String,
    pub visible: bool,
    pub style: PopupStyle,
}

impl Popup {
    pub fn new(id: String, position: LatLng, content: String) -> Self {
        Self {
            id,
            position,
            content,
            visible: false,
            style: PopupStyle::default(),
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// The popup content with `<br>` separators expanded to line breaks
    pub fn display_text(&self) -> String {
        self.content.replace("<br>", "\n")
    }

    /// Paints the popup just above-right of the given screen anchor
    pub fn paint_at(&self, painter: &Painter, anchor: Pos2) {
        if !self.visible {
            return;
        }

        let galley = painter.layout_no_wrap(
            self.display_text(),
            self.style.font_id.clone(),
            self.style.text_color,
        );
        let text_size = galley.size();
        let popup_size = Vec2::new(
            text_size.x + self.style.padding * 2.0,
            text_size.y + self.style.padding * 2.0,
        );
        let popup_rect = Rect::from_min_size(
            Pos2::new(anchor.x + 8.0, anchor.y - popup_size.y - 8.0),
            popup_size,
        );

        painter.rect_filled(popup_rect, self.style.rounding, self.style.background_color);
        painter.rect_stroke(
            popup_rect,
            self.style.rounding,
            (self.style.border_width, self.style.border_color),
        );
        painter.galley(
            popup_rect.min + Vec2::splat(self.style.padding),
            galley,
            self.style.text_color,
        );
    }
}

/// Tracks the open popups for the canvas
pub struct PopupManager {
    popups: HashMap<String, Popup>,
}

impl PopupManager {
    pub fn new() -> Self {
        Self {
            popups: HashMap::new(),
        }
    }

    /// Opens (or re-opens) a text popup at the given position
    pub fn show_text_popup(&mut self, id: String, position: LatLng, text: String) {
        let mut popup = Popup::new(id.clone(), position, text);
        popup.show();
        self.popups.insert(id, popup);
    }

    pub fn hide_all(&mut self) {
        for popup in self.popups.values_mut() {
            popup.hide();
        }
    }

    pub fn visible_count(&self) -> usize {
        self.popups.values().filter(|p| p.visible).count()
    }

    /// Paints every open popup at its projected screen position
    pub fn paint(&self, painter: &Painter, rect: Rect, viewport: &Viewport) {
        for popup in self.popups.values().filter(|p| p.visible) {
            let pixel = viewport.lat_lng_to_pixel(&popup.position);
            let anchor = Pos2::new(rect.left() + pixel.x as f32, rect.top() + pixel.y as f32);
            if rect.expand(40.0).contains(anchor) {
                popup.paint_at(painter, anchor);
            }
        }
    }
}

impl Default for PopupManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_visibility() {
        let mut popup = Popup::new(
            "p1".to_string(),
            LatLng::new(10.0, 20.0),
            "hello".to_string(),
        );
        assert!(!popup.visible);
        popup.show();
        assert!(popup.visible);
        popup.hide();
        assert!(!popup.visible);
    }

    #[test]
    fn test_display_text_expands_breaks() {
        let popup = Popup::new(
            "p1".to_string(),
            LatLng::new(0.0, 0.0),
            "Magnitude: 5<br>Location: offshore<br>Depth: 95 km".to_string(),
        );
        assert_eq!(
            popup.display_text(),
            "Magnitude: 5\nLocation: offshore\nDepth: 95 km"
        );
    }

    #[test]
    fn test_manager_show_and_hide_all() {
        let mut manager = PopupManager::new();
        manager.show_text_popup("a".to_string(), LatLng::new(0.0, 0.0), "a".to_string());
        manager.show_text_popup("b".to_string(), LatLng::new(1.0, 1.0), "b".to_string());
        assert_eq!(manager.visible_count(), 2);

        manager.hide_all();
        assert_eq!(manager.visible_count(), 0);
    }
}
