use std::path::PathBuf;

use cr_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const PROFILE_ENV: &str = "CLIPRING_PROFILE";

/// Resolves the data directory under the user's local data dir.
///
/// `CLIPRING_PROFILE=<name>` selects `clipring-<name>` so several profiles
/// can run side by side.
pub struct DirsAppDirsAdapter {
    base_data_local_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base_data_local_dir_override: None,
        }
    }

    /// Use `base` instead of the system data-local directory.
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            base_data_local_dir_override: Some(base),
        }
    }

    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_local_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataDirUnavailable)?;

        let profile = std::env::var(PROFILE_ENV).ok();
        Ok(AppDirs::under(&base_data, profile.as_deref()))
    }
}
