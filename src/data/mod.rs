mod config;
mod import_settings;
mod manifest;

pub use config::*;
pub use import_settings::*;
pub use manifest::*;
