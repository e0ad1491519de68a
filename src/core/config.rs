//! Configuration for the resort map.
//!
//! A [`ResortConfig`] bundles every fixed input the map needs: the layer
//! geometry table, the name to URL lookup, the non-interactive names, the
//! hover sound address and the entry gate behaviour. It is built once at
//! start-up and handed by reference to the registry, preloader and widget.
//! `Default` yields the built-in resort catalog; a JSON document of the same
//! shape can replace it.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{catalog, constants};
use crate::layers::{clouds::CloudRecord, layer::LayerCategory, spec::LayerRecord};
use crate::prelude::{HashMap, HashSet};
use crate::{ResortMapError, Result};

/// How the entry gate leaves the loading screen once every asset has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GateMode {
    /// `Loading -> ReadyToEnter -> Entered`; the visitor dismisses the screen.
    ClickToEnter { ready_delay_ms: u64 },
    /// `Loading -> Entered` after the delay, with no dismiss action.
    AutoEnter { delay_ms: u64 },
}

impl GateMode {
    pub fn delay(&self) -> Duration {
        match self {
            Self::ClickToEnter { ready_delay_ms } => Duration::from_millis(*ready_delay_ms),
            Self::AutoEnter { delay_ms } => Duration::from_millis(*delay_ms),
        }
    }
}

impl Default for GateMode {
    fn default() -> Self {
        Self::ClickToEnter {
            ready_delay_ms: constants::READY_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResortConfig {
    /// Layer geometry table in paint order.
    pub layers: Vec<LayerRecord>,
    /// Normalized layer name to remote image address.
    pub image_urls: HashMap<String, String>,
    /// Layers drawn as inert planes.
    pub non_interactive: Vec<String>,
    /// Overlay layer that is never rendered on the map.
    pub legend_layer: String,
    /// URL-table key holding the loading-screen logo.
    pub logo_key: String,
    /// Hover cue address. `None` means there is no audio element at all.
    pub hover_sound_url: Option<String>,
    pub building_layers: Vec<String>,
    pub feature_layers: Vec<String>,
    pub path_layers: Vec<String>,
    pub road_layers: Vec<String>,
    /// Drifting overlay drawn above the layers.
    pub clouds: Vec<CloudRecord>,
    /// The overlay is shipped with the catalog but off unless enabled.
    pub show_clouds: bool,
    pub gate: GateMode,
    pub fade_in_ms: u64,
    pub map_width: f64,
    pub map_height: f64,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for ResortConfig {
    fn default() -> Self {
        Self {
            layers: catalog::layer_records(),
            image_urls: catalog::image_urls().into_iter().collect(),
            non_interactive: owned(catalog::NON_INTERACTIVE_LAYER_NAMES),
            legend_layer: constants::LEGEND_LAYER_NAME.to_string(),
            logo_key: constants::LOGO_KEY.to_string(),
            hover_sound_url: Some(catalog::HOVER_SOUND_URL.to_string()),
            building_layers: owned(catalog::BUILDING_LAYER_NAMES),
            feature_layers: owned(catalog::FEATURE_LAYER_NAMES),
            path_layers: owned(catalog::PATH_LAYER_NAMES),
            road_layers: owned(catalog::ROAD_LAYER_NAMES),
            clouds: catalog::cloud_records(),
            show_clouds: false,
            gate: GateMode::default(),
            fade_in_ms: constants::FADE_IN_MS,
            map_width: constants::MAP_WIDTH,
            map_height: constants::MAP_HEIGHT,
        }
    }
}

impl ResortConfig {
    /// Parse and validate a JSON configuration. Missing fields fall back to
    /// the built-in catalog.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(ResortMapError::from)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(ResortMapError::from)?;
        log::info!("loading resort config from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::default();
        for record in &self.layers {
            if !seen.insert(record.name.as_str()) {
                return Err(ResortMapError::Config(format!(
                    "duplicate layer name '{}'",
                    record.name
                ))
                .into());
            }
            if record.width <= 0.0 || record.height <= 0.0 {
                return Err(ResortMapError::Config(format!(
                    "layer '{}' has a non-positive size {}x{}",
                    record.name, record.width, record.height
                ))
                .into());
            }
        }

        for cloud in &self.clouds {
            if cloud.width <= 0.0 || cloud.height <= 0.0 {
                return Err(ResortMapError::Config(format!(
                    "cloud {} has a non-positive size {}x{}",
                    cloud.id, cloud.width, cloud.height
                ))
                .into());
            }
        }

        if self.map_width <= 0.0 || self.map_height <= 0.0 {
            return Err(ResortMapError::Config("map dimensions must be positive".into()).into());
        }
        Ok(())
    }

    pub fn is_interactive(&self, name: &str) -> bool {
        !self.non_interactive.iter().any(|n| n == name)
    }

    pub fn category_of(&self, name: &str) -> LayerCategory {
        let contains = |names: &[String]| names.iter().any(|n| n == name);
        if contains(&self.building_layers) {
            LayerCategory::Building
        } else if contains(&self.feature_layers) {
            LayerCategory::Feature
        } else if contains(&self.path_layers) {
            LayerCategory::Path
        } else if contains(&self.road_layers) {
            LayerCategory::Road
        } else {
            LayerCategory::Scenery
        }
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.image_urls
            .get(&self.logo_key)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }

    /// Clouds to draw, empty unless the overlay is enabled.
    pub fn active_clouds(&self) -> &[CloudRecord] {
        if self.show_clouds {
            &self.clouds
        } else {
            &[]
        }
    }

    /// Unique cloud artwork to preload alongside the layers.
    pub fn cloud_urls(&self) -> Vec<String> {
        let mut seen = HashSet::default();
        self.active_clouds()
            .iter()
            .filter(|cloud| !cloud.src.is_empty() && seen.insert(cloud.src.as_str()))
            .map(|cloud| cloud.src.clone())
            .collect()
    }

    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ResortConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.logo_url().is_some());
        assert_eq!(config.gate, GateMode::ClickToEnter { ready_delay_ms: 500 });
    }

    #[test]
    fn test_categories() {
        let config = ResortConfig::default();
        assert_eq!(config.category_of("Gym"), LayerCategory::Building);
        assert_eq!(config.category_of("Boats"), LayerCategory::Feature);
        assert_eq!(config.category_of("Walkway"), LayerCategory::Path);
        assert_eq!(config.category_of("Roads buggy"), LayerCategory::Road);
        assert_eq!(config.category_of("BG"), LayerCategory::Scenery);
    }

    #[test]
    fn test_partial_json_falls_back_to_catalog() {
        let config = ResortConfig::from_json_str(
            r#"{ "hover_sound_url": null, "gate": { "mode": "auto_enter", "delay_ms": 250 } }"#,
        )
        .expect("valid config");

        assert!(config.hover_sound_url.is_none());
        assert_eq!(config.gate, GateMode::AutoEnter { delay_ms: 250 });
        assert_eq!(config.layers.len(), 48);
    }

    #[test]
    fn test_clouds_are_opt_in() {
        let mut config = ResortConfig::default();
        assert_eq!(config.clouds.len(), 16);
        assert!(config.active_clouds().is_empty());
        assert!(config.cloud_urls().is_empty());

        config.show_clouds = true;
        assert_eq!(config.active_clouds().len(), 16);
        assert_eq!(config.cloud_urls().len(), 2);
    }

    #[test]
    fn test_clouds_from_json() {
        let config = ResortConfig::from_json_str(
            r#"{
                "show_clouds": true,
                "clouds": [
                    { "id": 1, "src": "https://assets.test/cloud.png", "x": 10, "y": 20, "width": 300, "height": 150, "opacity": 0.5, "duration": 60 }
                ]
            }"#,
        )
        .expect("valid config");
        assert_eq!(config.cloud_urls(), vec!["https://assets.test/cloud.png".to_string()]);

        let bad = r#"{ "clouds": [ { "id": 2, "src": "c.png", "x": 0, "y": 0, "width": -1, "height": 10, "opacity": 1, "duration": 5 } ] }"#;
        assert!(ResortConfig::from_json_str(bad).is_err());
    }

    #[test]
    fn test_duplicate_layer_names_rejected() {
        let json = r#"{
            "layers": [
                { "index": 0, "name": "BG", "filename": "bg.png", "x": 0, "y": 0, "width": 10, "height": 10, "opacity": 255 },
                { "index": 1, "name": "BG", "filename": "bg2.png", "x": 0, "y": 0, "width": 10, "height": 10, "opacity": 255 }
            ]
        }"#;
        let err = ResortConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("duplicate layer name"));
    }

    #[test]
    fn test_non_positive_size_rejected() {
        let json = r#"{
            "layers": [
                { "index": 0, "name": "Gym", "filename": "gym.png", "x": 0, "y": 0, "width": 0, "height": 10, "opacity": 255 }
            ]
        }"#;
        assert!(ResortConfig::from_json_str(json).is_err());
    }
}
