use crate::core::{
    constants::{HOVER_SCALE, HOVER_Z_INDEX},
    geo::Bounds,
};
use crate::layers::spec::LayerSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerCategory {
    Building,
    Feature,
    Path,
    Road,
    Scenery,
}

impl std::fmt::Display for LayerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerCategory::Building => write!(f, "building"),
            LayerCategory::Feature => write!(f, "feature"),
            LayerCategory::Path => write!(f, "path"),
            LayerCategory::Road => write!(f, "road"),
            LayerCategory::Scenery => write!(f, "scenery"),
        }
    }
}

/// A renderable layer: geometry plus its resolved image address.
///
/// Only [`LayerRegistry`](crate::layers::registry::LayerRegistry) builds
/// these, so `url` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub spec: LayerSpec,
    pub url: String,
    pub interactive: bool,
    pub category: LayerCategory,
}

impl Layer {
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn bounds(&self) -> Bounds {
        self.spec.bounds()
    }

    /// Paint order for this frame. Inert layers never leave their configured
    /// index.
    pub fn effective_z_index(&self, hovered: bool) -> i32 {
        if self.interactive && hovered {
            HOVER_Z_INDEX
        } else {
            self.spec.stack_index
        }
    }

    pub fn effective_scale(&self, hovered: bool) -> f64 {
        if self.interactive && hovered {
            HOVER_SCALE
        } else {
            1.0
        }
    }

    /// Visual extent after the hover scale-up.
    pub fn visual_bounds(&self, hovered: bool) -> Bounds {
        self.bounds()
            .scaled_about_center(self.effective_scale(hovered))
    }
}
