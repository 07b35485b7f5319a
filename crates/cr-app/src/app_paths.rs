use std::path::PathBuf;

use cr_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub settings_path: PathBuf,
    pub registry_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            settings_path: dirs.app_data_root.join("settings.json"),
            registry_path: dirs.app_data_root.join("registry.json"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
