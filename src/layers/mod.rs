pub mod clouds;
pub mod layer;
pub mod registry;
pub mod spec;
pub mod visibility;
