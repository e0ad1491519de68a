pub mod loading;
pub mod style;
pub mod textures;
pub mod tooltip;
pub mod widget;

pub use loading::LoadingScreen;

pub use style::{LoadingStyle, ResortStyle, TooltipStyle};

pub use textures::TextureCache;

pub use tooltip::Tooltip;

pub use widget::{MapResponse, ResortMapExt, ResortMapWidget};
