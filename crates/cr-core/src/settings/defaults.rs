use super::model::*;

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            listener: ListenerMode::Auto,
            strip_text: false,
        }
    }
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_registry_length: 15,
            cache_only_favorites: false,
            move_item_first: false,
            delete_enabled: true,
            confirm_on_clear: true,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            preview_length: 50,
            topbar_preview_length: 15,
            topbar_mode: TopbarMode::Text,
            disable_down_arrow: false,
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            notify_on_copy: true,
        }
    }
}

impl Default for KeybindingSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            capture: CaptureSettings::default(),
            history: HistorySettings::default(),
            display: DisplaySettings::default(),
            notifications: NotificationSettings::default(),
            keybindings: KeybindingSettings::default(),
        }
    }
}
