use serde::{Deserialize, Serialize};

use crate::core::geo::Bounds;

/// One row of the layer geometry table as exported with the artwork.
///
/// `filename` and `opacity` travel with the export but are not used for
/// rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerRecord {
    pub index: i32,
    pub name: String,
    #[serde(default)]
    pub filename: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "full_opacity")]
    pub opacity: u8,
}

fn full_opacity() -> u8 {
    u8::MAX
}

/// Geometry and paint order of a named layer, in absolute map pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stack_index: i32,
}

impl LayerSpec {
    pub fn bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.x, self.y, self.width, self.height)
    }

    /// Key used in the URL table: spaces become underscores.
    pub fn url_key(&self) -> String {
        normalize_name(&self.name)
    }
}

impl From<&LayerRecord> for LayerSpec {
    fn from(record: &LayerRecord) -> Self {
        Self {
            name: record.name.clone(),
            x: record.x,
            y: record.y,
            width: record.width,
            height: record.height,
            stack_index: record.index,
        }
    }
}

pub fn normalize_name(name: &str) -> String {
    name.replace(' ', "_")
}
