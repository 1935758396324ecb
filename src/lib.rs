pub mod animation;
pub mod app;
pub mod camera;
pub mod error;
pub mod model;
pub mod renderer;
pub mod settings;
pub mod texture;
pub mod ui;

/// Application name used for the confy settings store.
pub const CONFY_APP_NAME: &str = "globevis-rs";
