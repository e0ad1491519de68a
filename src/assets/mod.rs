pub mod audio;
pub mod preloader;
pub mod source;
