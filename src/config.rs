//! Application configuration file support.
//!
//! Reads server and detection settings from a `spectre.toml` file. The
//! detection core itself takes no configuration from the environment; only
//! the server binary layers `HOST`/`PORT` environment overrides on top of
//! what this module loads.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::DetectionConfig;
use crate::db::repository::RepositoryError;

/// Full application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpectreConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub detection: DetectionConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum request body size in megabytes. Light curves can be large.
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_body_limit_mb() -> usize {
    50
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_mb: default_body_limit_mb(),
        }
    }
}

impl SpectreConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the default locations, falling back to
    /// defaults when no `spectre.toml` exists.
    pub fn from_default_location() -> Self {
        let search_paths = [
            PathBuf::from("spectre.toml"),
            PathBuf::from("config/spectre.toml"),
            PathBuf::from("../spectre.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                if let Ok(config) = Self::from_file(&path) {
                    return config;
                }
            }
        }

        Self::default()
    }
}
