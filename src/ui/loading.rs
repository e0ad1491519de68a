use egui::{Align, Button, Frame, Layout, ProgressBar, RichText, TextureId, Ui, Vec2};

use crate::assets::preloader::PreloadState;
use crate::core::gate::EntryGateState;
use crate::ui::style::ResortStyle;

/// Full-screen preload screen shown while the gate is closed.
pub struct LoadingScreen<'a> {
    pub progress: PreloadState,
    pub gate: EntryGateState,
    /// Logo texture and its native size, once fetched
    pub logo: Option<(TextureId, Vec2)>,
    pub style: &'a ResortStyle,
}

impl<'a> LoadingScreen<'a> {
    /// Draw the screen. Returns true when the visitor pressed Enter.
    pub fn show(self, ui: &mut Ui) -> bool {
        let style = &self.style.loading;
        let mut entered = false;

        Frame::none()
            .fill(self.style.background_color)
            .show(ui, |ui| {
                let available = ui.available_size();
                ui.allocate_ui_with_layout(
                    available,
                    Layout::top_down(Align::Center).with_main_align(Align::Center),
                    |ui| {
                        ui.set_max_width(style.max_width.min(available.x));

                        if let Some((texture_id, size)) = self.logo {
                            let height = if size.x > 0.0 {
                                style.logo_width * size.y / size.x
                            } else {
                                style.logo_width
                            };
                            ui.add(egui::Image::new(egui::load::SizedTexture::new(
                                texture_id,
                                Vec2::new(style.logo_width, height),
                            )));
                            ui.add_space(32.0);
                        }

                        match self.gate {
                            EntryGateState::Loading => {
                                ui.label(
                                    RichText::new("Preparing Your Virtual Tour")
                                        .font(style.title_font.clone())
                                        .color(style.text_color)
                                        .strong(),
                                );
                                ui.add_space(16.0);
                                ui.label(
                                    RichText::new("Loading resort assets...")
                                        .font(style.subtitle_font.clone())
                                        .color(style.subtitle_color),
                                );
                                ui.add_space(24.0);
                                ui.add(
                                    ProgressBar::new((self.progress.percentage / 100.0) as f32)
                                        .fill(style.bar_fill)
                                        .desired_width(ui.available_width()),
                                );
                                ui.add_space(12.0);
                                ui.label(
                                    RichText::new(format!(
                                        "{}%",
                                        self.progress.rounded_percentage()
                                    ))
                                    .font(style.percent_font.clone())
                                    .color(style.text_color),
                                );
                            }
                            EntryGateState::ReadyToEnter | EntryGateState::Entered => {
                                ui.label(
                                    RichText::new("Welcome to the Resort")
                                        .font(style.title_font.clone())
                                        .color(style.text_color)
                                        .strong(),
                                );
                                ui.add_space(16.0);
                                ui.label(
                                    RichText::new("Your tour is ready.")
                                        .font(style.subtitle_font.clone())
                                        .color(style.subtitle_color),
                                );
                                ui.add_space(24.0);
                                let enter = ui.add(
                                    Button::new(
                                        RichText::new("Enter")
                                            .size(24.0)
                                            .strong()
                                            .color(style.text_color),
                                    )
                                    .fill(style.bar_fill)
                                    .min_size(Vec2::new(160.0, 56.0)),
                                );
                                entered = enter.on_hover_text("Enter the interactive map").clicked();
                            }
                        }
                    },
                );
            });

        entered
    }
}
