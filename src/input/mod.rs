pub mod hover;

// Re-export the essential types
pub use hover::{HoverChange, HoverController, HoverState};
