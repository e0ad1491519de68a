//! # resortmap
//!
//! An illustrated resort map built from a stack of absolutely positioned
//! image layers.
//!
//! The library is split into a headless core (layer registry, asset
//! preloading, hover state, entry gate, draw list composition) and an
//! optional egui front end that paints the draw list and the loading screen.

pub mod assets;
pub mod core;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub mod runtime;
#[cfg(feature = "egui")]
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    config::{GateMode, ResortConfig},
    gate::{EntryGate, EntryGateState},
    geo::{Bounds, Point},
};

pub use layers::{
    clouds::CloudRecord,
    layer::{Layer, LayerCategory},
    registry::LayerRegistry,
    spec::{LayerRecord, LayerSpec},
    visibility::{LayerGroup, LayerVisibility},
};

pub use assets::{
    audio::{AudioRequest, HoverCue, SilentCue},
    preloader::{AssetPreloader, PreloadEvent, PreloadReport, PreloadState, PreloadTracker},
    source::{AssetSource, DecodedImage},
};

#[cfg(feature = "tokio-runtime")]
pub use assets::source::HttpAssetSource;

pub use input::hover::{HoverChange, HoverController, HoverState};

pub use rendering::scene::{title_case, DrawCommand, RenderContext};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum ResortMapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Asset error: {0}")]
    Asset(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = ResortMapError;

/// Install `env_logger` as the `log` backend, honouring `RUST_LOG`.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
