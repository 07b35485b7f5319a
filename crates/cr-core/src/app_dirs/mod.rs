//! Where ClipRing keeps its files.
//! ClipRing 数据目录

use std::path::{Path, PathBuf};

/// Directory name under the platform's local data dir.
pub const APP_DIR_NAME: &str = "clipring";

/// Resolved data root. Concrete file locations are derived from it by the
/// app layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

impl AppDirs {
    /// `<base>/clipring`, or `<base>/clipring-<profile>` for a non-empty profile.
    pub fn under(base: &Path, profile: Option<&str>) -> Self {
        let name = match profile {
            Some(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
            _ => APP_DIR_NAME.to_string(),
        };
        Self {
            app_data_root: base.join(name),
        }
    }
}
