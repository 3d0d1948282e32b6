//! Trip source backed by a local file.

use std::path::PathBuf;

use async_trait::async_trait;
use tripview_core::trip::TripSource;
use tripview_core::{Result, TripviewError};

/// Reads the trip document from disk.
#[derive(Debug, Clone)]
pub struct FileTripSource {
    path: PathBuf,
}

impl FileTripSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TripSource for FileTripSource {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("[FileTripSource] Reading {:?}", self.path);
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            TripviewError::fetch(format!("cannot read {}: {}", self.path.display(), e))
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
