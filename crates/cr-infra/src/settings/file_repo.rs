use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use cr_core::{
    ports::SettingsPort,
    settings::model::{Settings, CURRENT_SCHEMA_VERSION},
};
use tokio::fs;
use tracing::info;

use crate::fs::atomic_write;
use crate::settings::migration::SettingsMigrator;

pub struct FileSettingsRepository {
    path: PathBuf,
    migrator: SettingsMigrator,
}

impl FileSettingsRepository {
    /// Creates a repository backed by the JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            migrator: SettingsMigrator::new(),
        }
    }

    pub fn with_migrator(path: impl Into<PathBuf>, migrator: SettingsMigrator) -> Self {
        Self {
            path: path.into(),
            migrator,
        }
    }
}

#[async_trait]
impl SettingsPort for FileSettingsRepository {
    /// Loads settings, migrating and re-saving files written under an older
    /// schema. A missing file yields `Settings::default()`.
    async fn load(&self) -> Result<Settings> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read settings failed: {}", self.path.display()))
            }
        };

        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("parse settings failed: {}", self.path.display()))?;
        let original_version = settings.schema_version;
        let migrated = self.migrator.migrate_to_latest(settings)?;

        if original_version < CURRENT_SCHEMA_VERSION {
            info!(
                from = original_version,
                to = CURRENT_SCHEMA_VERSION,
                "Settings migrated"
            );
            self.save(&migrated).await?;
        }

        Ok(migrated)
    }

    /// Persist settings as pretty-printed JSON.
    async fn save(&self, settings: &Settings) -> Result<()> {
        let content =
            serde_json::to_string_pretty(settings).context("serialize settings failed")?;

        atomic_write(&self.path, &content).await
    }
}
