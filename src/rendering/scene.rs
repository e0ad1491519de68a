use crate::core::{
    constants::{CLOUD_Z_INDEX, TOOLTIP_OFFSET, TOOLTIP_Z_INDEX},
    geo::{Bounds, Point},
};
use crate::input::hover::HoverState;
use crate::layers::{clouds::CloudRecord, registry::LayerRegistry, visibility::LayerVisibility};

/// Commands produced for one frame, in map pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// An image plane. `bounds` already includes the hover scale.
    Layer {
        name: String,
        url: String,
        bounds: Bounds,
        z_index: i32,
        scale: f64,
        hovered: bool,
        interactive: bool,
    },
    /// Inert overlay image at its drifted position.
    Cloud {
        id: u32,
        url: String,
        bounds: Bounds,
        opacity: f32,
    },
    Tooltip(TooltipCommand),
}

impl DrawCommand {
    pub fn z_index(&self) -> i32 {
        match self {
            DrawCommand::Layer { z_index, .. } => *z_index,
            DrawCommand::Cloud { .. } => CLOUD_Z_INDEX,
            DrawCommand::Tooltip(tooltip) => tooltip.z_index,
        }
    }
}

/// Name label for the hovered layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipCommand {
    pub text: String,
    /// Bottom-center of the label: horizontally centred on the layer, just
    /// above its top edge.
    pub anchor: Point,
    pub z_index: i32,
}

/// Frame draw list: every visible layer in effective paint order, followed
/// by at most one tooltip.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub drawing_queue: Vec<DrawCommand>,
}

impl RenderContext {
    pub fn compose(
        registry: &LayerRegistry,
        hover: &HoverState,
        visibility: &LayerVisibility,
    ) -> Self {
        Self::compose_with_clouds(registry, hover, visibility, &[], 0.0, 0.0)
    }

    /// Like [`RenderContext::compose`], with the cloud overlay drifted to
    /// `elapsed_secs` across a map `map_width` pixels wide.
    pub fn compose_with_clouds(
        registry: &LayerRegistry,
        hover: &HoverState,
        visibility: &LayerVisibility,
        clouds: &[CloudRecord],
        elapsed_secs: f64,
        map_width: f64,
    ) -> Self {
        let mut drawing_queue: Vec<DrawCommand> =
            Vec::with_capacity(registry.len() + clouds.len() + 1);
        let mut tooltip = None;

        for layer in registry.layers() {
            if !visibility.is_visible(layer) {
                continue;
            }

            let hovered = layer.interactive && hover.is_hovered(layer.name());
            drawing_queue.push(DrawCommand::Layer {
                name: layer.name().to_string(),
                url: layer.url.clone(),
                bounds: layer.visual_bounds(hovered),
                z_index: layer.effective_z_index(hovered),
                scale: layer.effective_scale(hovered),
                hovered,
                interactive: layer.interactive,
            });

            if hovered {
                let box_ = layer.bounds();
                tooltip = Some(TooltipCommand {
                    text: title_case(layer.name()),
                    anchor: Point::new(box_.center().x, box_.min.y - TOOLTIP_OFFSET),
                    z_index: TOOLTIP_Z_INDEX,
                });
            }
        }

        drawing_queue.extend(clouds.iter().map(|cloud| DrawCommand::Cloud {
            id: cloud.id,
            url: cloud.src.clone(),
            bounds: cloud.bounds_at(elapsed_secs, map_width),
            opacity: cloud.opacity.clamp(0.0, 1.0),
        }));

        // stable: equal indices keep registry order
        drawing_queue.sort_by_key(DrawCommand::z_index);
        drawing_queue.extend(tooltip.map(DrawCommand::Tooltip));

        Self { drawing_queue }
    }

    pub fn get_drawing_queue(&self) -> &[DrawCommand] {
        &self.drawing_queue
    }

    pub fn tooltip(&self) -> Option<&TooltipCommand> {
        self.drawing_queue.iter().find_map(|cmd| match cmd {
            DrawCommand::Tooltip(tooltip) => Some(tooltip),
            _ => None,
        })
    }

    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.drawing_queue.iter().filter_map(|cmd| match cmd {
            DrawCommand::Layer { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }
}

/// Capitalize the first letter of every space-separated word, leaving the
/// rest of each word and the spacing untouched.
pub fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
