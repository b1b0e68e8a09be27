use std::path::Path;

use chrono::{DateTime, Utc};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::repository::DEFAULT_CATALOG_SIZE;

/// Environment variable selecting the optional `config/{APP_ENV}.yaml` layer.
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Runtime settings of the dashboard server.
///
/// Layered from `config/default.yaml`, then `config/{APP_ENV}.yaml`, then
/// `APP__*` environment variables (`APP__PORT=9000`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Key material for signing flash-message cookies; at least 64 bytes.
    pub secret_key: String,
    pub templates_dir: String,
    pub assets_dir: String,
    /// Mark the session cookie `Secure`; enable behind HTTPS.
    pub secure_cookies: bool,
    pub catalog_size: usize,
    /// Fixed "now" for generated timestamps. Startup time when absent.
    #[serde(default)]
    pub catalog_anchor: Option<DateTime<Utc>>,
    pub search_debounce_ms: u64,
}

impl ServerConfig {
    /// Load configuration relative to the working directory.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var(APP_ENV_VAR).unwrap_or_else(|_| "local".to_string());
        Self::load_from(Path::new("."), &app_env)
    }

    /// Load configuration from `root/config/`.
    pub fn load_from(root: &Path, app_env: &str) -> Result<Self, ConfigError> {
        let config_dir = root.join("config");
        Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("templates_dir", "templates/**/*")?
            .set_default("assets_dir", "assets")?
            .set_default("secure_cookies", false)?
            .set_default("catalog_size", DEFAULT_CATALOG_SIZE as u64)?
            .set_default("search_debounce_ms", 400)?
            .add_source(File::from(config_dir.join("default")).required(false))
            .add_source(File::from(config_dir.join(app_env)).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.address.clone(), self.port)
    }
}
