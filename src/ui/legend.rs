use crate::style::{hex_color, DEPTH_BREAKS, DEPTH_COLORS};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};

const SWATCH_SIZE: f32 = 12.0;
const ROW_HEIGHT: f32 = 16.0;
const PADDING: f32 = 8.0;
const WIDTH: f32 = 110.0;
const MARGIN: f32 = 10.0;

/// The depth legend, anchored to the bottom-right corner of the map
pub struct Legend;

impl Legend {
    /// Labels for the six depth bands: closed intervals except the
    /// open-ended top band ("90+")
    pub fn band_labels() -> Vec<String> {
        DEPTH_BREAKS
            .iter()
            .enumerate()
            .map(|(i, lower)| match DEPTH_BREAKS.get(i + 1) {
                Some(upper) => format!("{}–{}", lower, upper),
                None => format!("{}+", lower),
            })
            .collect()
    }

    /// Paints the legend into the bottom-right corner of `map_rect`
    pub fn paint(painter: &Painter, map_rect: Rect) {
        let labels = Self::band_labels();
        let title_height = ROW_HEIGHT;
        let height = title_height + labels.len() as f32 * ROW_HEIGHT + PADDING * 2.0;

        let rect = Rect::from_min_size(
            Pos2::new(
                map_rect.right() - WIDTH - MARGIN,
                map_rect.bottom() - height - MARGIN,
            ),
            Vec2::new(WIDTH, height),
        );

        painter.rect_filled(rect, 4.0, Color32::from_rgba_unmultiplied(255, 255, 255, 230));
        painter.rect_stroke(rect, 4.0, (1.0, Color32::GRAY));
        painter.text(
            rect.min + Vec2::splat(PADDING),
            Align2::LEFT_TOP,
            "Depth (km)",
            FontId::proportional(12.0),
            Color32::DARK_GRAY,
        );

        for (i, label) in labels.iter().enumerate() {
            let row_top = rect.top() + PADDING + title_height + i as f32 * ROW_HEIGHT;
            let swatch = Rect::from_min_size(
                Pos2::new(rect.left() + PADDING, row_top + (ROW_HEIGHT - SWATCH_SIZE) / 2.0),
                Vec2::splat(SWATCH_SIZE),
            );
            painter.rect_filled(swatch, 2.0, hex_color(DEPTH_COLORS[i], 1.0));
            painter.text(
                Pos2::new(swatch.right() + 6.0, row_top + ROW_HEIGHT / 2.0),
                Align2::LEFT_CENTER,
                label,
                FontId::proportional(11.0),
                Color32::BLACK,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_labels_match_depth_bands() {
        let labels = Legend::band_labels();
        assert_eq!(labels.len(), DEPTH_COLORS.len());
        assert_eq!(labels[0], "-10–10");
        assert_eq!(labels[4], "70–90");
        assert_eq!(labels[5], "90+");
    }
}
