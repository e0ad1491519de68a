use crate::core::config::ResortConfig;
use crate::layers::{layer::Layer, spec::LayerSpec};
use crate::prelude::{HashMap, HashSet};

/// The renderable layer set, resolved once from the static configuration.
///
/// Layers without a URL and the legend overlay are dropped. The remaining
/// layers are kept in paint order (by stack index, ties in table order).
#[derive(Debug, Clone, Default)]
pub struct LayerRegistry {
    layers: Vec<Layer>,
    /// Layer name to position in `layers`
    by_name: HashMap<String, usize>,
}

impl LayerRegistry {
    pub fn resolve(config: &ResortConfig) -> Self {
        let mut layers: Vec<Layer> = config
            .layers
            .iter()
            .filter_map(|record| {
                let spec = LayerSpec::from(record);
                if spec.name == config.legend_layer {
                    return None;
                }

                let url = config
                    .image_urls
                    .get(&spec.url_key())
                    .filter(|url| !url.is_empty())?
                    .clone();

                Some(Layer {
                    interactive: config.is_interactive(&spec.name),
                    category: config.category_of(&spec.name),
                    spec,
                    url,
                })
            })
            .collect();

        // stable, so equal indices keep table order
        layers.sort_by_key(|layer| layer.spec.stack_index);

        let by_name = layers
            .iter()
            .enumerate()
            .map(|(pos, layer)| (layer.spec.name.clone(), pos))
            .collect();

        log::debug!(
            "resolved {} renderable layers from {} records",
            layers.len(),
            config.layers.len()
        );

        Self { layers, by_name }
    }

    /// All renderable layers in paint order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn get(&self, name: &str) -> Option<&Layer> {
        self.by_name.get(name).map(|&pos| &self.layers[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn interactive_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|layer| layer.interactive)
    }

    /// Unique image addresses to preload, in paint order.
    pub fn image_urls(&self) -> Vec<String> {
        let mut seen = HashSet::default();
        self.layers
            .iter()
            .filter(|layer| seen.insert(layer.url.as_str()))
            .map(|layer| layer.url.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::spec::LayerRecord;

    fn record(index: i32, name: &str) -> LayerRecord {
        LayerRecord {
            index,
            name: name.to_string(),
            filename: format!("{index}_{name}.png"),
            x: 10.0 * index as f64,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            opacity: 255,
        }
    }

    fn small_config() -> ResortConfig {
        let mut config = ResortConfig::default();
        config.layers = vec![record(0, "BG"), record(7, "Gym"), record(46, "Map Ledgend")];
        config.image_urls = [
            ("BG", "https://assets.test/BG.png"),
            ("Gym", "https://assets.test/Gym.png"),
            ("Map_Ledgend", "https://assets.test/Map_Ledgend.png"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        config
    }

    #[test]
    fn test_legend_is_excluded() {
        let registry = LayerRegistry::resolve(&small_config());
        let names: Vec<&str> = registry.layers().iter().map(|l| l.name()).collect();

        assert_eq!(names, vec!["BG", "Gym"]);
        assert!(!registry.contains("Map Ledgend"));
        assert!(!registry.get("BG").map(|l| l.interactive).unwrap_or(true));
        assert!(registry.get("Gym").map(|l| l.interactive).unwrap_or(false));
    }

    #[test]
    fn test_missing_or_empty_url_is_excluded() {
        let mut config = small_config();
        config.layers.push(record(8, "Dream villa"));
        config.layers.push(record(9, "Grand hall"));
        config
            .image_urls
            .insert("Grand_hall".to_string(), String::new());

        let registry = LayerRegistry::resolve(&config);
        assert_eq!(registry.len(), 2);
        assert!(registry.layers().iter().all(|l| !l.url.is_empty()));
    }

    #[test]
    fn test_url_lookup_normalizes_spaces() {
        let mut config = small_config();
        config.layers.push(record(33, "Agri  fields"));
        config.image_urls.insert(
            "Agri__fields".to_string(),
            "https://assets.test/Agri__fields.png".to_string(),
        );

        let registry = LayerRegistry::resolve(&config);
        assert_eq!(
            registry.get("Agri  fields").map(|l| l.url.as_str()),
            Some("https://assets.test/Agri__fields.png")
        );
    }

    #[test]
    fn test_paint_order_follows_stack_index() {
        let mut config = small_config();
        config.layers = vec![record(7, "Gym"), record(0, "BG")];

        let registry = LayerRegistry::resolve(&config);
        let indices: Vec<i32> = registry.layers().iter().map(|l| l.spec.stack_index).collect();
        assert_eq!(indices, vec![0, 7]);
        assert_eq!(registry.get("Gym").map(|l| l.name()), Some("Gym"));
    }

    #[test]
    fn test_builtin_catalog_resolution() {
        let registry = LayerRegistry::resolve(&ResortConfig::default());

        // 48 records minus the legend
        assert_eq!(registry.len(), 47);
        assert_eq!(registry.image_urls().len(), 47);
        assert!(!registry.get("Entrance").map(|l| l.interactive).unwrap_or(true));
        assert_eq!(registry.interactive_layers().count(), 41);
    }
}
