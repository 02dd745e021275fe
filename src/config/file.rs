// src/config/file.rs
// File-based configuration from ~/.pattern-radar/config.toml

use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::error::Result;
use crate::seed::SampleData;

/// Top-level config structure
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct RadarConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub seed: SeedSection,
}

/// `[server]` section
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// `[seed]` section
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct SeedSection {
    /// Built-in records to load: "none", "default" or "extended"
    pub sample_data: Option<SampleData>,
    /// JSON array of patterns loaded after the sample data
    pub file: Option<PathBuf>,
}

impl RadarConfig {
    /// Load config from ~/.pattern-radar/config.toml, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();

        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Get the config file path
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pattern-radar")
            .join("config.toml")
    }
}
