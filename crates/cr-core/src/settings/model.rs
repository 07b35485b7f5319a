use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::SettingsError;
use super::version::SettingsVersion;

pub const CURRENT_SCHEMA_VERSION: u32 = SettingsVersion::CURRENT.as_u32();

/// Upper bound for `capture.interval_ms` (one hour).
pub const MAX_INTERVAL_MS: u64 = 60 * 60 * 1000;

/// How clipboard changes are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerMode {
    /// Ownership notifications when the platform offers them, polling otherwise.
    Auto,
    /// Re-read the clipboard every `interval_ms`.
    Polling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopbarMode {
    Icon,
    Text,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureSettings {
    pub interval_ms: u64,
    pub listener: ListenerMode,
    /// 去除首尾空白
    pub strip_text: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Capacity of the non-favorite partition. Favorites are unbounded.
    pub max_registry_length: usize,
    pub cache_only_favorites: bool,
    pub move_item_first: bool,
    pub delete_enabled: bool,
    pub confirm_on_clear: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub preview_length: usize,
    pub topbar_preview_length: usize,
    pub topbar_mode: TopbarMode,
    pub disable_down_arrow: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub notify_on_copy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingSettings {
    pub enabled: bool,
}

/// Immutable configuration snapshot.
///
/// 配置快照：变更时整体替换，不做逐字段修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub capture: CaptureSettings,

    #[serde(default)]
    pub history: HistorySettings,

    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub notifications: NotificationSettings,

    #[serde(default)]
    pub keybindings: KeybindingSettings,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

impl CaptureSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Delay before a navigated-to entry is written to the clipboard.
    pub fn delayed_selection_delay(&self) -> Duration {
        Duration::from_millis(self.interval_ms / 4 * 3 + self.interval_ms % 4 * 3 / 4)
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.schema_version != CURRENT_SCHEMA_VERSION {
            return Err(SettingsError::SchemaVersion {
                found: self.schema_version,
                expected: CURRENT_SCHEMA_VERSION,
            });
        }
        if self.capture.interval_ms == 0 {
            return Err(SettingsError::invalid("capture.interval_ms", "must be at least 1"));
        }
        if self.capture.interval_ms > MAX_INTERVAL_MS {
            return Err(SettingsError::invalid(
                "capture.interval_ms",
                "must not exceed one hour",
            ));
        }
        if self.display.preview_length == 0 {
            return Err(SettingsError::invalid("display.preview_length", "must be at least 1"));
        }
        if self.display.topbar_preview_length == 0 {
            return Err(SettingsError::invalid(
                "display.topbar_preview_length",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Whether switching from `self` to `next` needs the capture listener rebuilt.
    pub fn capture_changed(&self, next: &Settings) -> bool {
        self.capture.listener != next.capture.listener
            || self.capture.interval_ms != next.capture.interval_ms
    }
}
