use crate::layers::layer::{Layer, LayerCategory};

/// Toggleable groups offered to the visitor. Scenery has no toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerGroup {
    Buildings,
    Features,
    Paths,
    Roads,
}

impl LayerGroup {
    pub const ALL: [LayerGroup; 4] = [
        LayerGroup::Buildings,
        LayerGroup::Features,
        LayerGroup::Paths,
        LayerGroup::Roads,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LayerGroup::Buildings => "Buildings",
            LayerGroup::Features => "Features",
            LayerGroup::Paths => "Paths",
            LayerGroup::Roads => "Roads",
        }
    }

    fn of(category: LayerCategory) -> Option<Self> {
        match category {
            LayerCategory::Building => Some(LayerGroup::Buildings),
            LayerCategory::Feature => Some(LayerGroup::Features),
            LayerCategory::Path => Some(LayerGroup::Paths),
            LayerCategory::Road => Some(LayerGroup::Roads),
            LayerCategory::Scenery => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerVisibility {
    pub buildings: bool,
    pub features: bool,
    pub paths: bool,
    pub roads: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            buildings: true,
            features: true,
            paths: true,
            roads: true,
        }
    }
}

impl LayerVisibility {
    pub fn group_mut(&mut self, group: LayerGroup) -> &mut bool {
        match group {
            LayerGroup::Buildings => &mut self.buildings,
            LayerGroup::Features => &mut self.features,
            LayerGroup::Paths => &mut self.paths,
            LayerGroup::Roads => &mut self.roads,
        }
    }

    pub fn is_group_visible(&self, group: LayerGroup) -> bool {
        match group {
            LayerGroup::Buildings => self.buildings,
            LayerGroup::Features => self.features,
            LayerGroup::Paths => self.paths,
            LayerGroup::Roads => self.roads,
        }
    }

    pub fn is_visible(&self, layer: &Layer) -> bool {
        LayerGroup::of(layer.category)
            .map(|group| self.is_group_visible(group))
            .unwrap_or(true)
    }
}
