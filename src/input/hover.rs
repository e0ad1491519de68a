//! Hover tracking for interactive layers.
//!
//! Only pointer-enter matters. The hover target changes when the pointer
//! enters another interactive layer; leaving a layer for empty space or an
//! inert layer keeps the current target, so at most one tooltip exists.

use crate::core::geo::Point;
use crate::layers::{layer::Layer, registry::LayerRegistry, visibility::LayerVisibility};

/// The single active hover target, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Option<String>,
}

impl HoverState {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_hovered(&self, name: &str) -> bool {
        self.current.as_deref() == Some(name)
    }
}

/// A pointer-enter on an interactive layer. The caller restarts the hover
/// cue for every change, including re-entering the current target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverChange {
    pub entered: String,
    pub previous: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct HoverController {
    state: HoverState,
    /// Interactive layer currently under the pointer, used to detect enters.
    pointer_over: Option<String>,
}

impl HoverController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HoverState {
        &self.state
    }

    pub fn hovered(&self) -> Option<&str> {
        self.state.current()
    }

    /// Pointer entered `layer`. Inert layers are ignored.
    pub fn pointer_enter(&mut self, layer: &Layer) -> Option<HoverChange> {
        if !layer.interactive {
            return None;
        }

        let previous = self.state.current.replace(layer.name().to_string());
        log::trace!("hover {:?} -> {}", previous, layer.name());
        Some(HoverChange {
            entered: layer.name().to_string(),
            previous,
        })
    }

    /// Topmost visible interactive layer whose visual box contains `point`
    /// (map coordinates). The hovered layer is tested at its raised index
    /// and enlarged extent; on equal index the later layer in paint order
    /// wins.
    pub fn hit_test<'a>(
        &self,
        registry: &'a LayerRegistry,
        visibility: &LayerVisibility,
        point: Point,
    ) -> Option<&'a Layer> {
        registry
            .interactive_layers()
            .filter(|layer| visibility.is_visible(layer))
            .filter(|layer| {
                let hovered = self.state.is_hovered(layer.name());
                layer.visual_bounds(hovered).contains(&point)
            })
            .enumerate()
            .max_by_key(|(order, layer)| {
                let hovered = self.state.is_hovered(layer.name());
                (layer.effective_z_index(hovered), *order)
            })
            .map(|(_, layer)| layer)
    }

    /// Feed the pointer position (map coordinates, `None` when outside the
    /// map). Emits a change when the pointer enters an interactive layer.
    pub fn pointer_moved(
        &mut self,
        registry: &LayerRegistry,
        visibility: &LayerVisibility,
        point: Option<Point>,
    ) -> Option<HoverChange> {
        let target = point.and_then(|p| self.hit_test(registry, visibility, p));
        let target_name = target.map(|layer| layer.name().to_string());
        if target_name == self.pointer_over {
            return None;
        }

        self.pointer_over = target_name;
        target.and_then(|layer| self.pointer_enter(layer))
    }

    /// Drop the hover target if its layer was hidden.
    pub fn retain_visible(&mut self, registry: &LayerRegistry, visibility: &LayerVisibility) {
        let still_visible = self
            .state
            .current()
            .and_then(|name| registry.get(name))
            .map(|layer| visibility.is_visible(layer))
            .unwrap_or(false);

        if !still_visible {
            if self.state.current.take().is_some() {
                log::debug!("hover target hidden, clearing hover");
            }
            self.pointer_over = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ResortConfig;
    use crate::layers::spec::LayerRecord;

    fn record(index: i32, name: &str, x: f64, y: f64, w: f64, h: f64) -> LayerRecord {
        LayerRecord {
            index,
            name: name.to_string(),
            filename: String::new(),
            x,
            y,
            width: w,
            height: h,
            opacity: 255,
        }
    }

    fn registry() -> LayerRegistry {
        let mut config = ResortConfig::default();
        config.layers = vec![
            record(0, "BG", 0.0, 0.0, 1000.0, 1000.0),
            record(5, "Gym", 100.0, 100.0, 100.0, 100.0),
            record(6, "Store", 150.0, 150.0, 100.0, 100.0),
        ];
        config.image_urls = ["BG", "Gym", "Store"]
            .iter()
            .map(|k| (k.to_string(), format!("https://assets.test/{k}.png")))
            .collect();
        LayerRegistry::resolve(&config)
    }

    #[test]
    fn test_inert_layer_cannot_be_hovered() {
        let registry = registry();
        let mut hover = HoverController::new();
        let bg = registry.get("BG").expect("bg");

        assert!(hover.pointer_enter(bg).is_none());
        assert!(hover.hovered().is_none());
        assert!(hover
            .hit_test(&registry, &LayerVisibility::default(), Point::new(900.0, 900.0))
            .is_none());
    }

    #[test]
    fn test_new_target_supersedes_previous() {
        let registry = registry();
        let visibility = LayerVisibility::default();
        let mut hover = HoverController::new();

        let first = hover.pointer_moved(&registry, &visibility, Some(Point::new(110.0, 110.0)));
        assert_eq!(first.map(|c| c.entered), Some("Gym".to_string()));

        let second = hover
            .pointer_moved(&registry, &visibility, Some(Point::new(240.0, 240.0)))
            .expect("entered store");
        assert_eq!(second.entered, "Store");
        assert_eq!(second.previous.as_deref(), Some("Gym"));
        assert_eq!(hover.hovered(), Some("Store"));
    }

    #[test]
    fn test_moving_within_layer_emits_nothing() {
        let registry = registry();
        let visibility = LayerVisibility::default();
        let mut hover = HoverController::new();

        assert!(hover
            .pointer_moved(&registry, &visibility, Some(Point::new(110.0, 110.0)))
            .is_some());
        assert!(hover
            .pointer_moved(&registry, &visibility, Some(Point::new(120.0, 115.0)))
            .is_none());
    }

    #[test]
    fn test_leaving_keeps_hover_and_reentry_replays() {
        let registry = registry();
        let visibility = LayerVisibility::default();
        let mut hover = HoverController::new();

        hover.pointer_moved(&registry, &visibility, Some(Point::new(110.0, 110.0)));
        assert!(hover
            .pointer_moved(&registry, &visibility, Some(Point::new(800.0, 800.0)))
            .is_none());
        assert_eq!(hover.hovered(), Some("Gym"));

        assert!(hover.pointer_moved(&registry, &visibility, None).is_none());
        let again = hover
            .pointer_moved(&registry, &visibility, Some(Point::new(110.0, 110.0)))
            .expect("re-entered gym");
        assert_eq!(again.previous.as_deref(), Some("Gym"));
    }

    #[test]
    fn test_hovered_layer_wins_overlap() {
        let registry = registry();
        let visibility = LayerVisibility::default();
        let mut hover = HoverController::new();

        // overlap region belongs to Store (higher index) until Gym is raised
        let overlap = Point::new(175.0, 175.0);
        assert_eq!(
            hover.hit_test(&registry, &visibility, overlap).map(|l| l.name()),
            Some("Store")
        );

        let gym = registry.get("Gym").expect("gym");
        hover.pointer_enter(gym);
        assert_eq!(
            hover.hit_test(&registry, &visibility, overlap).map(|l| l.name()),
            Some("Gym")
        );
    }

    #[test]
    fn test_hover_uses_enlarged_extent() {
        let registry = registry();
        let visibility = LayerVisibility::default();
        let mut hover = HoverController::new();
        let gym = registry.get("Gym").expect("gym");

        // just outside the native box, inside the 1.1x box
        let edge = Point::new(97.0, 120.0);
        assert!(hover.hit_test(&registry, &visibility, edge).is_none());
        hover.pointer_enter(gym);
        assert_eq!(
            hover.hit_test(&registry, &visibility, edge).map(|l| l.name()),
            Some("Gym")
        );
    }

    #[test]
    fn test_hidden_target_is_cleared() {
        let registry = registry();
        let mut visibility = LayerVisibility::default();
        let mut hover = HoverController::new();
        hover.pointer_enter(registry.get("Gym").expect("gym"));

        hover.retain_visible(&registry, &visibility);
        assert_eq!(hover.hovered(), Some("Gym"));

        visibility.buildings = false;
        hover.retain_visible(&registry, &visibility);
        assert!(hover.hovered().is_none());
        assert!(hover
            .hit_test(&registry, &visibility, Point::new(110.0, 110.0))
            .is_none());
    }
}
