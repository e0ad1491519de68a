//! Core constants for the resort map: stacking, hover feedback, gate timing
//! and the native map canvas.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Stacking index given to the hovered layer. Exceeds every configured index.
pub const HOVER_Z_INDEX: i32 = 100;

/// Uniform scale applied to the hovered layer around its own center.
pub const HOVER_SCALE: f64 = 1.1;

/// Stacking index of the tooltip, one above the hovered layer.
pub const TOOLTIP_Z_INDEX: i32 = HOVER_Z_INDEX + 1;

/// Stacking index of the cloud overlay: above every configured layer, below
/// the hovered one.
pub const CLOUD_Z_INDEX: i32 = 90;

/// Gap between the top edge of the hovered layer and the tooltip, in map pixels.
pub const TOOLTIP_OFFSET: f64 = 16.0;

/// Pause between reaching 100% and offering the Enter action (or auto-entering).
pub const READY_DELAY_MS: u64 = 500;

/// Duration of the map fade-in once the gate reaches `Entered`.
pub const FADE_IN_MS: u64 = 1000;

/// Native width of the illustrated map in pixels.
pub const MAP_WIDTH: f64 = 4001.0;

/// Native height of the illustrated map in pixels.
pub const MAP_HEIGHT: f64 = 2250.0;

/// Canvas colour behind the map and the loading screen (`#177b61`).
pub const BACKGROUND_RGB: (u8, u8, u8) = (0x17, 0x7b, 0x61);

/// Name of the legend overlay, never rendered as a map layer.
pub const LEGEND_LAYER_NAME: &str = "Map Ledgend";

/// Reserved URL-table key for the loading-screen logo.
pub const LOGO_KEY: &str = "Logo";
