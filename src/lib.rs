pub mod app;
pub mod constants;
pub mod display;
pub mod logging;
pub mod settings;
