pub mod defaults;
pub mod error;
pub mod model;
pub mod version;

pub use error::SettingsError;
pub use model::{
    CaptureSettings, DisplaySettings, HistorySettings, KeybindingSettings, ListenerMode,
    NotificationSettings, Settings, TopbarMode, CURRENT_SCHEMA_VERSION, MAX_INTERVAL_MS,
};
