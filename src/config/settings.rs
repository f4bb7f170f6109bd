//! Service settings loaded from `config.toml` and the environment.
//!
//! The TOML file is optional; every field has a default. `DATABASE_URL` and
//! `BIND_ADDRESS` from the environment (or `.env`) take precedence over the file.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default location of the settings file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level settings structure mirroring `config.toml`
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Persistent store settings
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// HTTP server settings
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Socket address the API listens on
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

/// Persistent store settings
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// `SeaORM` connection URL; `mode=rwc` creates the file on first start
    #[serde(default = "default_database_url")]
    pub url: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_database_url() -> String {
    "sqlite://condo_dues.sqlite?mode=rwc".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

impl Settings {
    /// Applies `DATABASE_URL` and `BIND_ADDRESS` overrides from the environment.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            debug!("DATABASE_URL overrides configured database url");
            self.database.url = url;
        }
        if let Ok(addr) = std::env::var("BIND_ADDRESS") {
            debug!("BIND_ADDRESS overrides configured bind address");
            self.server.bind_address = addr;
        }
        self
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file {:?}: {e}", path.as_ref()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {:?}: {e}", path.as_ref()),
    })
}

/// Loads the service settings.
///
/// Reads the file named by `CONDO_DUES_CONFIG`, or `config.toml` when unset. A missing
/// file yields defaults; a present but invalid file is an error. Environment overrides
/// are applied last.
pub fn load_settings() -> Result<Settings> {
    let path =
        std::env::var("CONDO_DUES_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let settings = if Path::new(&path).exists() {
        info!("Loading settings from {path}");
        load_config(&path)?
    } else {
        info!("No settings file at {path}, using defaults");
        Settings::default()
    };

    Ok(settings.with_env_overrides())
}
