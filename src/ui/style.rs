use egui::{Color32, FontId, Stroke};

use crate::core::constants::BACKGROUND_RGB;

/// Style configuration for the resort map and its loading screen
#[derive(Debug, Clone)]
pub struct ResortStyle {
    /// Canvas colour behind the map and the loading screen
    pub background_color: Color32,
    pub tooltip: TooltipStyle,
    pub loading: LoadingStyle,
}

/// Style for the hover name label
#[derive(Debug, Clone)]
pub struct TooltipStyle {
    pub background_color: Color32,
    pub border_stroke: Stroke,
    pub text_color: Color32,
    /// Font size in map pixels; scaled with the map
    pub font_size: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub rounding: f32,
    /// Half width of the pointer arrow under the label
    pub arrow_size: f32,
}

/// Style for the preload screen
#[derive(Debug, Clone)]
pub struct LoadingStyle {
    pub title_font: FontId,
    pub subtitle_font: FontId,
    pub percent_font: FontId,
    pub text_color: Color32,
    pub subtitle_color: Color32,
    pub bar_fill: Color32,
    pub logo_width: f32,
    pub max_width: f32,
}

impl Default for ResortStyle {
    fn default() -> Self {
        let (r, g, b) = BACKGROUND_RGB;
        Self {
            background_color: Color32::from_rgb(r, g, b),
            tooltip: TooltipStyle::default(),
            loading: LoadingStyle::default(),
        }
    }
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background_color: Color32::from_black_alpha(215),
            border_stroke: Stroke::new(1.0, Color32::from_rgba_unmultiplied(45, 212, 191, 128)),
            text_color: Color32::WHITE,
            font_size: 30.0,
            padding_x: 24.0,
            padding_y: 12.0,
            rounding: 8.0,
            arrow_size: 10.0,
        }
    }
}

impl Default for LoadingStyle {
    fn default() -> Self {
        Self {
            title_font: FontId::proportional(30.0),
            subtitle_font: FontId::proportional(18.0),
            percent_font: FontId::monospace(20.0),
            text_color: Color32::WHITE,
            subtitle_color: Color32::from_gray(229),
            bar_fill: Color32::from_rgb(16, 185, 129),
            logo_width: 192.0,
            max_width: 448.0,
        }
    }
}
