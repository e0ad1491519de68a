//! egui front end for the layered resort map.
//!
//! The widget owns the per-session interaction state (hover, visibility,
//! textures, hover cue) and paints the draw list composed by
//! [`RenderContext`] each frame, scaled to fit the available space.

use std::sync::Arc;

use egui::{Color32, CursorIcon, Pos2, Rect, Response, Sense, Ui, Vec2};

use crate::assets::{audio::HoverCue, source::DecodedImage};
use crate::core::geo::{Bounds, FitTransform, Point};
use crate::input::hover::{HoverChange, HoverController};
use crate::layers::{clouds::CloudRecord, registry::LayerRegistry, visibility::LayerVisibility};
use crate::prelude::HashMap;
use crate::rendering::scene::{DrawCommand, RenderContext};
use crate::ui::{style::ResortStyle, textures::TextureCache, tooltip::Tooltip};

/// What happened during one frame of the map.
pub struct MapResponse {
    pub response: Response,
    /// Set when the pointer entered an interactive layer this frame
    pub hover_change: Option<HoverChange>,
}

pub struct ResortMapWidget {
    registry: Arc<LayerRegistry>,
    hover: HoverController,
    visibility: LayerVisibility,
    textures: TextureCache,
    cue: Box<dyn HoverCue>,
    style: ResortStyle,
    map_size: Point,
    clouds: Vec<CloudRecord>,
    show_clouds: bool,
}

impl ResortMapWidget {
    pub fn new(registry: Arc<LayerRegistry>, cue: Box<dyn HoverCue>, map_size: Point) -> Self {
        Self {
            registry,
            hover: HoverController::new(),
            visibility: LayerVisibility::default(),
            textures: TextureCache::new(),
            cue,
            style: ResortStyle::default(),
            map_size,
            clouds: Vec::new(),
            show_clouds: false,
        }
    }

    pub fn with_style(mut self, style: ResortStyle) -> Self {
        self.style = style;
        self
    }

    /// Drifting overlay above the layers. Clouds never take the hover.
    pub fn with_clouds(mut self, clouds: Vec<CloudRecord>) -> Self {
        self.show_clouds = !clouds.is_empty();
        self.clouds = clouds;
        self
    }

    pub fn has_clouds(&self) -> bool {
        !self.clouds.is_empty()
    }

    pub fn clouds_visible(&self) -> bool {
        self.show_clouds
    }

    pub fn set_clouds_visible(&mut self, visible: bool) {
        self.show_clouds = visible;
    }

    pub fn upload_images(&mut self, ctx: &egui::Context, images: &HashMap<String, DecodedImage>) {
        self.textures.upload_all(ctx, images);
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hover.hovered()
    }

    pub fn visibility(&self) -> LayerVisibility {
        self.visibility
    }

    /// Change group visibility; a hidden hover target loses its hover.
    pub fn set_visibility(&mut self, visibility: LayerVisibility) {
        self.visibility = visibility;
        self.hover.retain_visible(&self.registry, &self.visibility);
    }

    /// Draw the map into all available space with the given fade opacity.
    pub fn show(&mut self, ui: &mut Ui, opacity: f32) -> MapResponse {
        let desired_size = ui.available_size();
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        let fit = FitTransform::contain(self.map_size, rect_to_bounds(rect));

        let pointer = ui
            .input(|i| i.pointer.hover_pos())
            .filter(|pos| rect.contains(*pos))
            .and_then(|pos| fit.screen_to_map(Point::new(pos.x as f64, pos.y as f64)));
        let hover_change = self
            .hover
            .pointer_moved(&self.registry, &self.visibility, pointer);

        if let Some(change) = &hover_change {
            log::debug!("hovering {}", change.entered);
            if let Err(e) = self.cue.restart() {
                log::error!("Audio play failed: {}", e);
            }
        }

        let over_interactive = pointer
            .and_then(|p| self.hover.hit_test(&self.registry, &self.visibility, p))
            .is_some();
        if over_interactive {
            ui.output_mut(|o| o.cursor_icon = CursorIcon::PointingHand);
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, self.style.background_color);

        let opacity = opacity.clamp(0.0, 1.0);
        let tint = Color32::WHITE.linear_multiply(opacity);
        let clouds: &[CloudRecord] = if self.show_clouds { &self.clouds } else { &[] };
        let scene = RenderContext::compose_with_clouds(
            &self.registry,
            self.hover.state(),
            &self.visibility,
            clouds,
            ui.input(|i| i.time),
            self.map_size.x,
        );
        if !clouds.is_empty() {
            ui.ctx().request_repaint();
        }

        for cmd in scene.get_drawing_queue() {
            match cmd {
                DrawCommand::Layer { url, bounds, .. } => {
                    // failed loads have no texture and are simply missing
                    if let Some(texture_id) = self.textures.get(url) {
                        painter.image(
                            texture_id,
                            bounds_to_rect(&fit.bounds_to_screen(bounds)),
                            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                            tint,
                        );
                    }
                }
                DrawCommand::Cloud {
                    url,
                    bounds,
                    opacity: cloud_opacity,
                    ..
                } => {
                    if let Some(texture_id) = self.textures.get(url) {
                        painter.image(
                            texture_id,
                            bounds_to_rect(&fit.bounds_to_screen(bounds)),
                            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                            Color32::WHITE.linear_multiply(opacity * cloud_opacity),
                        );
                    }
                }
                DrawCommand::Tooltip(tooltip) => {
                    let anchor = fit.map_to_screen(tooltip.anchor);
                    Tooltip {
                        text: &tooltip.text,
                        anchor: Pos2::new(anchor.x as f32, anchor.y as f32),
                        scale: fit.scale as f32,
                        style: &self.style.tooltip,
                    }
                    .paint(&painter);
                }
            }
        }

        MapResponse {
            response,
            hover_change,
        }
    }
}

fn rect_to_bounds(rect: Rect) -> Bounds {
    Bounds::new(
        Point::new(rect.min.x as f64, rect.min.y as f64),
        Point::new(rect.max.x as f64, rect.max.y as f64),
    )
}

fn bounds_to_rect(bounds: &Bounds) -> Rect {
    Rect::from_min_max(
        Pos2::new(bounds.min.x as f32, bounds.min.y as f32),
        Pos2::new(bounds.max.x as f32, bounds.max.y as f32),
    )
}

/// Extension trait so callers can write `ui.resort_map(&mut widget, 1.0)`.
pub trait ResortMapExt {
    fn resort_map(&mut self, widget: &mut ResortMapWidget, opacity: f32) -> MapResponse;
}

impl ResortMapExt for Ui {
    fn resort_map(&mut self, widget: &mut ResortMapWidget, opacity: f32) -> MapResponse {
        widget.show(self, opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::audio::SilentCue;
    use crate::core::config::ResortConfig;
    use crate::layers::spec::LayerRecord;
    use crate::Result;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingCue(Arc<AtomicUsize>);

    impl HoverCue for CountingCue {
        fn restart(&mut self) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(crate::ResortMapError::Audio("no device".into()).into())
        }
    }

    fn registry() -> Arc<LayerRegistry> {
        let mut config = ResortConfig::default();
        config.layers = vec![
            LayerRecord {
                index: 0,
                name: "BG".into(),
                filename: String::new(),
                x: 0.0,
                y: 0.0,
                width: 400.0,
                height: 300.0,
                opacity: 255,
            },
            LayerRecord {
                index: 7,
                name: "Gym".into(),
                filename: String::new(),
                x: 100.0,
                y: 100.0,
                width: 100.0,
                height: 100.0,
                opacity: 255,
            },
        ];
        config.image_urls = ["BG", "Gym"]
            .iter()
            .map(|k| (k.to_string(), format!("https://assets.test/{k}.png")))
            .collect();
        Arc::new(LayerRegistry::resolve(&config))
    }

    fn run_frame(ctx: &egui::Context, widget: &mut ResortMapWidget, pointer: Option<Pos2>) -> Option<HoverChange> {
        let mut raw_input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 300.0))),
            ..Default::default()
        };
        if let Some(pos) = pointer {
            raw_input.events.push(egui::Event::PointerMoved(pos));
        }

        let mut change = None;
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| {
                    change = widget.show(ui, 1.0).hover_change;
                });
        });
        change
    }

    #[test]
    fn test_hover_restarts_cue_and_tolerates_failure() {
        let ctx = egui::Context::default();
        let plays = Arc::new(AtomicUsize::new(0));
        let mut widget = ResortMapWidget::new(
            registry(),
            Box::new(CountingCue(plays.clone())),
            Point::new(400.0, 300.0),
        );

        run_frame(&ctx, &mut widget, None);
        let change = run_frame(&ctx, &mut widget, Some(Pos2::new(150.0, 150.0)));

        assert_eq!(change.map(|c| c.entered), Some("Gym".to_string()));
        assert_eq!(widget.hovered(), Some("Gym"));
        assert_eq!(plays.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_background_never_hovers() {
        let ctx = egui::Context::default();
        let mut widget = ResortMapWidget::new(registry(), Box::new(SilentCue), Point::new(400.0, 300.0));

        run_frame(&ctx, &mut widget, Some(Pos2::new(20.0, 20.0)));
        assert!(widget.hovered().is_none());
    }

    #[test]
    fn test_clouds_do_not_block_hover() {
        let ctx = egui::Context::default();
        let cloud = CloudRecord {
            id: 1,
            src: "https://assets.test/cloud.png".into(),
            x: 50.0,
            y: 50.0,
            width: 250.0,
            height: 200.0,
            opacity: 0.8,
            duration: 0.0,
        };
        let mut widget = ResortMapWidget::new(registry(), Box::new(SilentCue), Point::new(400.0, 300.0))
            .with_clouds(vec![cloud]);
        assert!(widget.has_clouds());
        assert!(widget.clouds_visible());

        run_frame(&ctx, &mut widget, Some(Pos2::new(150.0, 150.0)));
        assert_eq!(widget.hovered(), Some("Gym"));

        widget.set_clouds_visible(false);
        assert!(!widget.clouds_visible());
        assert!(widget.has_clouds());
    }

    #[test]
    fn test_hiding_group_clears_hover() {
        let ctx = egui::Context::default();
        let mut widget = ResortMapWidget::new(registry(), Box::new(SilentCue), Point::new(400.0, 300.0));
        run_frame(&ctx, &mut widget, Some(Pos2::new(150.0, 150.0)));
        assert_eq!(widget.hovered(), Some("Gym"));

        widget.set_visibility(LayerVisibility {
            buildings: false,
            ..LayerVisibility::default()
        });
        assert!(widget.hovered().is_none());
    }
}
