//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/tripview/config.toml).

use std::path::PathBuf;

use tripview_core::config::RootConfig;
use tripview_core::{Result, TripviewError};

use crate::paths::TripviewPaths;

/// Configuration service that loads the root configuration.
///
/// A missing file yields the defaults; a file that exists but does not parse,
/// or carries out-of-range map settings, is an error rather than a silent
/// fallback.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a ConfigService reading `config.toml` from the resolved config dir.
    pub fn new(paths: &TripviewPaths) -> Result<Self> {
        let path = paths
            .config_file()
            .map_err(|e| TripviewError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Reads and validates the root configuration.
    pub fn get_config(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            tracing::info!(
                "[ConfigService] No config at {:?}, using defaults",
                self.path
            );
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config: RootConfig = toml::from_str(&content)?;
        config.map.validate()?;
        tracing::debug!("[ConfigService] Loaded config from {:?}", self.path);
        Ok(config)
    }
}
