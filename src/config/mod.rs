/// Database connection and schema bootstrap
pub mod database;

/// Service settings from config.toml and the environment
pub mod settings;

pub use settings::{Settings, load_settings};
