use std::time::Duration;

use resortmap::prelude::*;

fn record(index: i32, name: &str, x: f64, y: f64, width: f64, height: f64) -> LayerRecord {
    LayerRecord {
        index,
        name: name.to_string(),
        filename: String::new(),
        x,
        y,
        width,
        height,
        opacity: 255,
    }
}

fn small_resort() -> ResortConfig {
    let mut config = ResortConfig::default();
    config.layers = vec![
        record(0, "BG", 0.0, 0.0, 4001.0, 2250.0),
        record(7, "Gym", 1200.0, 600.0, 200.0, 150.0),
        record(8, "Dream villa", 1500.0, 600.0, 200.0, 150.0),
        record(49, "Map Ledgend", 3500.0, 1900.0, 400.0, 300.0),
    ];
    config.image_urls = ["BG", "Gym", "Dream_villa", "Map_Ledgend"]
        .iter()
        .map(|k| (k.to_string(), format!("https://assets.test/{k}.png")))
        .collect();
    config
}

#[test]
fn test_legend_is_dropped_from_registry() {
    let registry = LayerRegistry::resolve(&small_resort());

    let names: Vec<&str> = registry.layers().iter().map(|l| l.name()).collect();
    assert_eq!(names, vec!["BG", "Gym", "Dream villa"]);
    assert!(!registry.contains("Map Ledgend"));
    assert!(registry.get("Dream villa").map(|l| l.interactive).unwrap_or(false));
}

#[test]
fn test_layer_without_url_is_dropped() {
    let mut config = small_resort();
    config.image_urls.insert("Gym".to_string(), String::new());

    let registry = LayerRegistry::resolve(&config);
    assert!(!registry.contains("Gym"));
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_hovering_raises_layer_and_shows_tooltip() {
    let registry = LayerRegistry::resolve(&small_resort());
    let visibility = LayerVisibility::default();
    let mut hover = HoverController::new();

    let change = hover
        .pointer_moved(&registry, &visibility, Some(Point::new(1300.0, 700.0)))
        .expect("entered gym");
    assert_eq!(change.entered, "Gym");
    assert!(change.previous.is_none());

    let scene = RenderContext::compose(&registry, hover.state(), &visibility);
    let tooltip = scene.tooltip().expect("tooltip");
    assert_eq!(tooltip.text, "Gym");

    let last_layer = scene
        .get_drawing_queue()
        .iter()
        .rev()
        .find_map(|cmd| match cmd {
            DrawCommand::Layer { name, z_index, .. } => Some((name.clone(), *z_index)),
            _ => None,
        });
    assert_eq!(last_layer, Some(("Gym".to_string(), 100)));
}

#[test]
fn test_moving_between_layers_keeps_single_tooltip() {
    let registry = LayerRegistry::resolve(&small_resort());
    let visibility = LayerVisibility::default();
    let mut hover = HoverController::new();

    hover.pointer_moved(&registry, &visibility, Some(Point::new(1300.0, 700.0)));
    let change = hover
        .pointer_moved(&registry, &visibility, Some(Point::new(1650.0, 700.0)))
        .expect("entered villa");
    assert_eq!(change.previous.as_deref(), Some("Gym"));

    let scene = RenderContext::compose(&registry, hover.state(), &visibility);
    let tooltips = scene
        .get_drawing_queue()
        .iter()
        .filter(|cmd| matches!(cmd, DrawCommand::Tooltip(_)))
        .count();
    assert_eq!(tooltips, 1);
    assert_eq!(scene.tooltip().map(|t| t.text.as_str()), Some("Dream Villa"));
}

#[test]
fn test_click_to_enter_flow() {
    let mut gate = EntryGate::new(
        GateMode::ClickToEnter { ready_delay_ms: 500 },
        Duration::from_millis(1000),
    );
    let start = Instant::now();

    gate.on_progress(PreloadState::new(2, 4).percentage, start);
    assert!(!gate.enter(start));
    assert_eq!(gate.state(), EntryGateState::Loading);

    gate.on_progress(PreloadState::new(4, 4).percentage, start);
    assert!(!gate.tick(start + Duration::from_millis(100)));
    assert!(gate.tick(start + Duration::from_millis(500)));
    assert_eq!(gate.state(), EntryGateState::ReadyToEnter);

    let entered_at = start + Duration::from_millis(600);
    assert!(gate.enter(entered_at));
    assert_eq!(gate.state(), EntryGateState::Entered);
    assert!(gate.fade_alpha(entered_at) < 0.01);
    assert!((gate.fade_alpha(entered_at + Duration::from_millis(1000)) - 1.0).abs() < 1e-6);
}

#[test]
fn test_builtin_resort_resolves() {
    let config = ResortConfig::default();
    config.validate().expect("builtin config is valid");

    let registry = LayerRegistry::resolve(&config);
    assert!(!registry.is_empty());
    assert!(!registry.contains("Map Ledgend"));
    assert!(registry
        .layers()
        .windows(2)
        .all(|pair| pair[0].spec.stack_index <= pair[1].spec.stack_index));
}
