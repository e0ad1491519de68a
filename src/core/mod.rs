pub mod catalog;
pub mod config;
pub mod constants;
pub mod gate;
pub mod geo;
