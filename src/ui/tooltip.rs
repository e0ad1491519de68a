use egui::{Align2, FontId, Painter, Pos2, Rect, Shape, Vec2};

use crate::ui::style::TooltipStyle;

/// Paints the hover label with a small arrow pointing at the layer.
pub struct Tooltip<'a> {
    pub text: &'a str,
    /// Screen position of the arrow tip
    pub anchor: Pos2,
    /// Map-to-screen scale, applied to font size and padding
    pub scale: f32,
    pub style: &'a TooltipStyle,
}

impl<'a> Tooltip<'a> {
    pub fn paint(&self, painter: &Painter) -> Rect {
        let style = self.style;
        let scale = self.scale.max(0.25);
        let font_id = FontId::proportional(style.font_size * scale);

        let galley = painter.layout_no_wrap(self.text.to_string(), font_id.clone(), style.text_color);
        let arrow = style.arrow_size * scale;
        let popup_size = Vec2::new(
            galley.size().x + style.padding_x * 2.0 * scale,
            galley.size().y + style.padding_y * 2.0 * scale,
        );

        let bottom_center = self.anchor - Vec2::new(0.0, arrow);
        let popup_rect = Rect::from_center_size(
            bottom_center - Vec2::new(0.0, popup_size.y / 2.0),
            popup_size,
        );

        let rounding = style.rounding * scale;
        painter.rect_filled(popup_rect, rounding, style.background_color);
        painter.rect_stroke(popup_rect, rounding, style.border_stroke);

        painter.add(Shape::convex_polygon(
            vec![
                Pos2::new(bottom_center.x - arrow, bottom_center.y),
                Pos2::new(bottom_center.x + arrow, bottom_center.y),
                self.anchor,
            ],
            style.background_color,
            style.border_stroke,
        ));

        painter.text(
            popup_rect.center(),
            Align2::CENTER_CENTER,
            self.text,
            font_id,
            style.text_color,
        );

        popup_rect
    }
}
