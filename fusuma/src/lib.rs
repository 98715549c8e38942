pub mod app;
pub mod core;
pub mod effect;
pub mod loader;
pub mod platform;
pub mod script;
