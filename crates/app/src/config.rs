//! Application configuration.

use std::{env, path::PathBuf};

use roastery::config::PricingConfig;

/// Base URL of the mock backend when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5176";

/// Directory holding the record store files when none is configured.
pub const DEFAULT_DATA_DIR: &str = ".roastery";

/// Runtime configuration, read from the environment with defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Mock backend base URL (`ROASTERY_BACKEND_URL`).
    pub backend_url: String,
    /// Record store directory (`ROASTERY_DATA_DIR`).
    pub data_dir: PathBuf,
    pub pricing: PricingConfig,
}

impl AppConfig {
    /// Reads the configuration from the environment, defaulting every
    /// unset variable.
    #[must_use]
    pub fn from_env() -> Self {
        let backend_url =
            env::var("ROASTERY_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_owned());

        let data_dir = env::var("ROASTERY_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        Self {
            backend_url,
            data_dir,
            pricing: PricingConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            pricing: PricingConfig::default(),
        }
    }
}
