use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use cr_core::ports::RegistryPort;
use cr_core::registry::{decode_records, PersistedRecord, RegistryRecord};
use tokio::fs;
use tracing::debug;

use super::atomic_write;

/// History registry stored as a JSON array.
///
/// Elements are `{"contents", "favorite"}` objects in recency order, oldest
/// first. Plain strings written by older releases are still accepted on load.
pub struct FileRegistryRepository {
    path: PathBuf,
}

impl FileRegistryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RegistryPort for FileRegistryRepository {
    /// A missing file is an empty registry. Elements that are neither a string
    /// nor a record are skipped; a file that is not a JSON array is an error.
    async fn load(&self) -> Result<Vec<PersistedRecord>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No registry file yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read registry failed: {}", self.path.display()))
            }
        };

        let document: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("parse registry failed: {}", self.path.display()))?;
        decode_records(document)
            .with_context(|| format!("decode registry failed: {}", self.path.display()))
    }

    async fn save(&self, records: &[RegistryRecord]) -> Result<()> {
        let content = serde_json::to_string(records).context("serialize registry failed")?;
        atomic_write(&self.path, &content).await
    }
}
