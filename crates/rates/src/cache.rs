use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::models::RateSnapshot;

/// A rate snapshot persisted as a JSON file.
#[derive(Debug, Clone)]
pub struct RateCache {
    path: PathBuf,
}

impl RateCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the cached snapshot; a missing file is not an error.
    pub async fn load(&self) -> Result<Option<RateSnapshot>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("{} not found.", self.path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn store(&self, snapshot: &RateSnapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        tokio::fs::write(&self.path, json).await?;
        log::debug!("Stored exchange rates in {}", self.path.display());
        Ok(())
    }
}
