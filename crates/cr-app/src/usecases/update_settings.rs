//! Use case for updating engine settings
//! 更新引擎设置的用例

use std::fmt::Debug;
use std::sync::Arc;

use anyhow::Result;
use cr_core::ports::SettingsPort;
use cr_core::Settings;
use tracing::{info, info_span, Instrument};

use super::apply_settings::{ApplySettings, SettingsApplied};
use crate::session::HistorySession;

/// Use case for updating settings from a host.
///
/// ## Behavior / 行为
/// - Validates the new snapshot
/// - Logs changed fields with old/new values
/// - Persists settings through the settings port
/// - Applies them to the running session
///
/// Nothing is applied when validation or saving fails.
pub struct UpdateSettings {
    settings: Arc<dyn SettingsPort>,
    apply: ApplySettings,
}

impl UpdateSettings {
    pub fn new(settings: Arc<dyn SettingsPort>, apply: ApplySettings) -> Self {
        Self { settings, apply }
    }

    /// Execute the use case.
    ///
    /// # Returns / 返回值
    /// - `Ok(applied)` once the settings are saved and active
    /// - `Err(e)` if validation or save fails
    pub async fn execute(
        &self,
        session: &mut HistorySession,
        settings: Settings,
    ) -> Result<SettingsApplied> {
        let span = info_span!("usecase.update_settings.execute");

        async {
            settings.validate()?;

            let changes = SettingsDiff::diff(session.settings(), &settings);
            if !changes.is_empty() {
                info!(
                    changed_fields = %changes.to_log_string(),
                    "Updating engine settings"
                );
            } else {
                info!("Updating engine settings (no changes detected)");
            }

            self.settings.save(&settings).await?;
            self.apply.execute(session, settings).await
        }
        .instrument(span)
        .await
    }
}

/// Field-level difference between two settings snapshots.
struct SettingsDiff {
    changes: Vec<(&'static str, String, String)>,
}

impl SettingsDiff {
    fn diff(old: &Settings, new: &Settings) -> Self {
        let mut diff = Self {
            changes: Vec::new(),
        };

        diff.field("capture.interval_ms", &old.capture.interval_ms, &new.capture.interval_ms);
        diff.field("capture.listener", &old.capture.listener, &new.capture.listener);
        diff.field("capture.strip_text", &old.capture.strip_text, &new.capture.strip_text);

        diff.field(
            "history.max_registry_length",
            &old.history.max_registry_length,
            &new.history.max_registry_length,
        );
        diff.field(
            "history.cache_only_favorites",
            &old.history.cache_only_favorites,
            &new.history.cache_only_favorites,
        );
        diff.field(
            "history.move_item_first",
            &old.history.move_item_first,
            &new.history.move_item_first,
        );
        diff.field(
            "history.delete_enabled",
            &old.history.delete_enabled,
            &new.history.delete_enabled,
        );
        diff.field(
            "history.confirm_on_clear",
            &old.history.confirm_on_clear,
            &new.history.confirm_on_clear,
        );

        diff.field(
            "display.preview_length",
            &old.display.preview_length,
            &new.display.preview_length,
        );
        diff.field(
            "display.topbar_preview_length",
            &old.display.topbar_preview_length,
            &new.display.topbar_preview_length,
        );
        diff.field("display.topbar_mode", &old.display.topbar_mode, &new.display.topbar_mode);
        diff.field(
            "display.disable_down_arrow",
            &old.display.disable_down_arrow,
            &new.display.disable_down_arrow,
        );

        diff.field(
            "notifications.notify_on_copy",
            &old.notifications.notify_on_copy,
            &new.notifications.notify_on_copy,
        );
        diff.field("keybindings.enabled", &old.keybindings.enabled, &new.keybindings.enabled);

        diff
    }

    fn field<T: PartialEq + Debug>(&mut self, name: &'static str, old: &T, new: &T) {
        if old != new {
            self.changes
                .push((name, format!("{:?}", old), format!("{:?}", new)));
        }
    }

    fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    fn to_log_string(&self) -> String {
        if self.changes.is_empty() {
            return "(no changes)".to_string();
        }

        self.changes
            .iter()
            .map(|(name, old, new)| format!("{}: {} → {}", name, old, new))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
