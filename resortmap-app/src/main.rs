use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Receiver;
use resortmap::{
    assets::audio::RodioCue,
    prelude::*,
    runtime::{spawn_with_result, AsyncHandleWithResult},
    ui::style::ResortStyle,
};

/// Standalone resort map viewer
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    resortmap::init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => ResortConfig::from_file(&path).map_err(|e| anyhow::anyhow!(e))?,
        None => ResortConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("Resort Map"),
        ..Default::default()
    };

    eframe::run_native(
        "resortmap-app",
        options,
        Box::new(|cc| Box::new(ResortApp::new(cc, config))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))?;

    Ok(())
}

/// The main application struct
struct ResortApp {
    config: ResortConfig,
    registry: Arc<LayerRegistry>,
    gate: EntryGate,
    progress: PreloadState,
    preload_rx: Receiver<PreloadEvent>,
    _preload_task: Box<dyn AsyncHandle>,
    report: Option<PreloadReport>,
    logo_task: Option<Box<dyn AsyncHandleWithResult>>,
    logo: Option<egui::TextureHandle>,
    map: Option<ResortMapWidget>,
    style: ResortStyle,
    show_layer_panel: bool,
}

impl ResortApp {
    fn new(_cc: &eframe::CreationContext<'_>, config: ResortConfig) -> Self {
        let registry = Arc::new(LayerRegistry::resolve(&config));

        let preloader = AssetPreloader::new(Arc::new(HttpAssetSource::new()));
        let mut image_urls = registry.image_urls();
        for url in config.cloud_urls() {
            if !image_urls.contains(&url) {
                image_urls.push(url);
            }
        }
        let total = image_urls.len() + 1;
        let (preload_rx, preload_task) = preloader.start(
            image_urls,
            AudioRequest::from_url(config.hover_sound_url.as_deref()),
        );

        // the logo is not part of the preload count
        let logo_task = config.logo_url().map(|url| {
            let url = url.to_string();
            spawn_with_result(async move {
                match HttpAssetSource::new().load_image(&url).await {
                    Ok(image) => Some(image),
                    Err(e) => {
                        log::warn!("logo unavailable: {}", e);
                        None
                    }
                }
            })
        });

        Self {
            gate: EntryGate::new(config.gate, config.fade_in()),
            progress: PreloadState::new(0, total),
            config,
            registry,
            preload_rx,
            _preload_task: preload_task,
            report: None,
            logo_task,
            logo: None,
            map: None,
            style: ResortStyle::default(),
            show_layer_panel: true,
        }
    }

    fn drain_preload_events(&mut self, now: Instant) {
        for event in self.preload_rx.try_iter() {
            match event {
                PreloadEvent::Progress(state) => {
                    self.progress = state;
                    self.gate.on_progress(state.percentage, now);
                }
                PreloadEvent::Complete(report) => {
                    log::info!(
                        "preload finished: {} images, {} failed",
                        report.images.len(),
                        report.failed.len()
                    );
                    self.progress = report.state;
                    self.gate.on_progress(report.state.percentage, now);
                    self.report = Some(report);
                }
            }
        }
    }

    fn poll_logo(&mut self, ctx: &egui::Context) {
        let Some(task) = self.logo_task.as_mut() else {
            return;
        };
        if !task.is_finished() {
            return;
        }

        let image = task
            .try_result()
            .and_then(|any| any.downcast::<Option<DecodedImage>>().ok())
            .and_then(|boxed| *boxed);
        if let Some(image) = image {
            let color_image = egui::ColorImage::from_rgba_unmultiplied(image.size(), &image.rgba);
            self.logo = Some(ctx.load_texture("resortmap:logo", color_image, egui::TextureOptions::LINEAR));
        }
        self.logo_task = None;
    }

    fn ensure_map(&mut self, ctx: &egui::Context) {
        if self.map.is_some() {
            return;
        }
        let Some(report) = self.report.as_mut() else {
            return;
        };

        let mut map = ResortMapWidget::new(
            self.registry.clone(),
            build_cue(report.audio.clone()),
            Point::new(self.config.map_width, self.config.map_height),
        )
        .with_style(self.style.clone())
        .with_clouds(self.config.active_clouds().to_vec());
        // pixels live on the GPU from here on
        map.upload_images(ctx, &report.take_images());
        self.map = Some(map);
    }

    fn layer_panel(&mut self, ctx: &egui::Context) {
        let Some(map) = self.map.as_mut() else {
            return;
        };

        egui::SidePanel::right("layer_panel").resizable(false).show(ctx, |ui| {
            ui.heading("Layers");
            ui.separator();

            let mut visibility = map.visibility();
            for group in LayerGroup::ALL {
                ui.checkbox(visibility.group_mut(group), group.label());
            }
            if visibility != map.visibility() {
                map.set_visibility(visibility);
            }
            if map.has_clouds() {
                let mut clouds = map.clouds_visible();
                if ui.checkbox(&mut clouds, "Clouds").changed() {
                    map.set_clouds_visible(clouds);
                }
            }

            ui.separator();
            match map.hovered() {
                Some(name) => ui.label(format!("Hovering: {}", title_case(name))),
                None => ui.label("Hover a building to explore"),
            };
        });
    }
}

fn build_cue(audio: Option<Arc<Vec<u8>>>) -> Box<dyn HoverCue> {
    let Some(data) = audio else {
        return Box::new(SilentCue);
    };
    match RodioCue::new(data) {
        Ok(cue) => Box::new(cue),
        Err(e) => {
            log::warn!("hover sound disabled: {}", e);
            Box::new(SilentCue)
        }
    }
}

impl eframe::App for ResortApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.drain_preload_events(now);
        self.gate.tick(now);
        self.poll_logo(ctx);

        match self.gate.state() {
            EntryGateState::Loading | EntryGateState::ReadyToEnter => {
                egui::CentralPanel::default()
                    .frame(egui::Frame::none())
                    .show(ctx, |ui| {
                        let screen = LoadingScreen {
                            progress: self.progress,
                            gate: self.gate.state(),
                            logo: self.logo.as_ref().map(|t| (t.id(), t.size_vec2())),
                            style: &self.style,
                        };
                        if screen.show(ui) {
                            self.gate.enter(now);
                        }
                    });

                let wait = self
                    .gate
                    .time_until_transition(now)
                    .unwrap_or(Duration::from_millis(50))
                    .min(Duration::from_millis(50));
                ctx.request_repaint_after(wait);
            }
            EntryGateState::Entered => {
                self.ensure_map(ctx);

                egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
                    egui::menu::bar(ui, |ui| {
                        ui.menu_button("View", |ui| {
                            ui.checkbox(&mut self.show_layer_panel, "Layer Panel");
                        });
                    });
                });

                if self.show_layer_panel {
                    self.layer_panel(ctx);
                }

                let opacity = self.gate.fade_alpha(now);
                let background = self.style.background_color;
                egui::CentralPanel::default()
                    .frame(egui::Frame::none().fill(background))
                    .show(ctx, |ui| {
                        if let Some(map) = self.map.as_mut() {
                            use resortmap::ui::ResortMapExt;
                            ui.resort_map(map, opacity);
                        }
                    });

                if self.gate.is_fading(now) || self.map.is_none() {
                    ctx.request_repaint();
                }
            }
        }
    }
}
