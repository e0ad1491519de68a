//! Prelude module for common resortmap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use resortmap::prelude::*;`

pub use crate::core::{
    config::{GateMode, ResortConfig},
    gate::{EntryGate, EntryGateState},
    geo::{Bounds, FitTransform, Point},
};

pub use crate::layers::{
    clouds::CloudRecord,
    layer::{Layer, LayerCategory},
    registry::LayerRegistry,
    spec::{LayerRecord, LayerSpec},
    visibility::{LayerGroup, LayerVisibility},
};

pub use crate::assets::{
    audio::{AudioRequest, HoverCue, SilentCue},
    preloader::{AssetPreloader, PreloadEvent, PreloadReport, PreloadState, PreloadTracker},
    source::{AssetSource, DecodedImage},
};

#[cfg(feature = "tokio-runtime")]
pub use crate::assets::source::HttpAssetSource;

pub use crate::input::hover::{HoverChange, HoverController, HoverState};

pub use crate::rendering::scene::{title_case, DrawCommand, RenderContext, TooltipCommand};

pub use crate::runtime::{runtime, spawn, AsyncHandle, AsyncSpawner};

#[cfg(feature = "egui")]
pub use crate::ui::{
    loading::LoadingScreen,
    textures::TextureCache,
    widget::{MapResponse, ResortMapWidget},
};

pub use crate::{Error as ResortMapError, Result};

pub use std::{
    pin::Pin,
    sync::{Arc, Mutex},
    time::Duration,
};

pub use instant::Instant;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};

pub use futures::Future;
