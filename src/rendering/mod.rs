pub mod scene;

// Re-export main types
pub use scene::{title_case, DrawCommand, RenderContext, TooltipCommand};
