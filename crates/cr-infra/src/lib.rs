//! # cr-infra
//!
//! File-backed registry and settings repositories, settings migration and the
//! tokio scheduler.

pub mod fs;
pub mod settings;
pub mod time;

pub use fs::FileRegistryRepository;
pub use settings::{FileSettingsRepository, SettingsMigrator};
pub use time::TokioScheduler;
