// src/config/mod.rs
// Configuration: file values overlaid with CLI/env overrides

pub mod file;

pub use file::RadarConfig;

use std::path::PathBuf;
use tracing::info;

use crate::error::Result;
use crate::model::Pattern;
use crate::seed::{self, SampleData};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Values supplied on the command line or through environment variables.
/// Anything set here wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub sample_data: Option<SampleData>,
    pub seed_file: Option<PathBuf>,
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub sample_data: SampleData,
    pub seed_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(RadarConfig::default(), Overrides::default())
    }
}

impl Settings {
    pub fn resolve(file: RadarConfig, overrides: Overrides) -> Self {
        Self {
            host: overrides
                .host
                .or(file.server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            sample_data: overrides
                .sample_data
                .or(file.seed.sample_data)
                .unwrap_or_default(),
            seed_file: overrides.seed_file.or(file.seed.file),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Sample records followed by the seed file, if any. Seed file entries
    /// replace sample entries that share an id once inserted into the store.
    pub fn initial_patterns(&self) -> Result<Vec<Pattern>> {
        let mut patterns = self.sample_data.patterns();

        if let Some(path) = &self.seed_file {
            let loaded = seed::load_seed_file(path)?;
            info!(path = %path.display(), count = loaded.len(), "Seed file loaded");
            patterns.extend(loaded);
        }

        Ok(patterns)
    }
}
