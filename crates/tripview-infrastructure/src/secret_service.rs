//! Secret service implementation.
//!
//! This module provides a service for loading the map provider credential
//! stored in secret.json, with an environment variable override.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tripview_core::config::SecretConfig;
use tripview_core::secret::SecretService;

use crate::paths::TripviewPaths;

/// Environment variable that overrides the map key from secret.json.
pub const MAP_API_KEY_ENV: &str = "TRIPVIEW_MAP_API_KEY";

/// Service for loading secret configuration.
///
/// # Example
///
/// ```ignore
/// use tripview_infrastructure::SecretServiceImpl;
/// use tripview_core::secret::SecretService;
///
/// let service = SecretServiceImpl::new(None)?;
/// let secrets = service.load_secrets().await?;
/// ```
#[derive(Clone)]
pub struct SecretServiceImpl {
    file_path: PathBuf,
    env_api_key: Option<String>,
}

impl SecretServiceImpl {
    /// Creates a new SecretServiceImpl reading secret.json from the config dir
    /// and `TRIPVIEW_MAP_API_KEY` from the environment.
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let file_path = TripviewPaths::new(base_path)
            .secret_file()
            .map_err(|e| anyhow::anyhow!("Failed to get secret path: {}", e))?;
        let env_api_key = std::env::var(MAP_API_KEY_ENV).ok();
        Ok(Self::with_path(file_path, env_api_key))
    }

    /// Creates a service for an explicit file and override value.
    pub fn with_path(file_path: impl Into<PathBuf>, env_api_key: Option<String>) -> Self {
        Self {
            file_path: file_path.into(),
            env_api_key: env_api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    fn read_file(&self) -> Result<SecretConfig, String> {
        if !self.file_path.exists() {
            tracing::debug!("[SecretService] No secret file at {:?}", self.file_path);
            return Ok(SecretConfig::default());
        }

        let content = std::fs::read_to_string(&self.file_path)
            .map_err(|e| format!("Failed to read secret file: {}", e))?;
        // Parse errors from serde_json can echo input; keep only the position.
        serde_json::from_str(&content).map_err(|e| {
            format!(
                "Failed to parse secret file at line {}, column {}",
                e.line(),
                e.column()
            )
        })
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig, String> {
        match &self.env_api_key {
            Some(key) => {
                tracing::debug!("[SecretService] Using map key from {}", MAP_API_KEY_ENV);
                Ok(SecretConfig::with_map_api_key(key.clone()))
            }
            None => self.read_file(),
        }
    }
}
