//! Settings-change handling: push a new snapshot through the engine.
//! 设置变更处理

use std::sync::Arc;

use anyhow::Result;
use cr_core::ports::{ClipboardPort, RegistryPort, SettingsPort};
use cr_core::settings::TopbarMode;
use cr_core::Settings;
use tracing::{info, info_span, warn, Instrument};

use super::persist_registry;
use crate::session::HistorySession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsApplied {
    /// Listener mode or poll interval changed; the runtime rebuilds capture.
    pub capture_changed: bool,
    pub evicted: usize,
}

/// Replace the session's settings snapshot and re-validate the store.
///
/// # Behavior / 行为
/// - Invalid settings are rejected and the previous snapshot stays active.
/// - The history is evicted to the new capacity and the registry rewritten.
/// - When the topbar shows text it is refreshed from a clipboard read.
///
/// - 非法设置被拒绝，沿用旧快照。
/// - 按新容量淘汰并重写注册表。
/// - 顶栏显示文字时重新读取剪贴板刷新。
pub struct ApplySettings {
    clipboard: Arc<dyn ClipboardPort>,
    registry: Arc<dyn RegistryPort>,
}

impl ApplySettings {
    pub fn new(clipboard: Arc<dyn ClipboardPort>, registry: Arc<dyn RegistryPort>) -> Self {
        Self {
            clipboard,
            registry,
        }
    }

    pub async fn execute(
        &self,
        session: &mut HistorySession,
        settings: Settings,
    ) -> Result<SettingsApplied> {
        let span = info_span!("usecase.apply_settings.execute");

        async {
            settings.validate()?;

            let previous = session.replace_settings(settings);
            let capture_changed = previous.capture_changed(session.settings());

            let max_len = session.settings().history.max_registry_length;
            let evicted = session.store_mut().evict_oldest(max_len).len();
            persist_registry(self.registry.as_ref(), session).await;

            let shows_text = matches!(
                session.settings().display.topbar_mode,
                TopbarMode::Text | TopbarMode::Both
            );
            if shows_text && !session.is_private() {
                match self.clipboard.read_text() {
                    Ok(text) => session.set_topbar_text(text),
                    Err(err) => warn!(error = %err, "Failed to read clipboard for topbar refresh"),
                }
            }

            info!(capture_changed, evicted, "Settings applied");
            Ok(SettingsApplied {
                capture_changed,
                evicted,
            })
        }
        .instrument(span)
        .await
    }
}

/// Configuration-changed event: re-read settings from storage and apply them.
pub struct ReloadSettings {
    settings: Arc<dyn SettingsPort>,
    apply: ApplySettings,
}

impl ReloadSettings {
    pub fn new(settings: Arc<dyn SettingsPort>, apply: ApplySettings) -> Self {
        Self { settings, apply }
    }

    #[tracing::instrument(name = "usecase.reload_settings.execute", skip_all)]
    pub async fn execute(&self, session: &mut HistorySession) -> Result<SettingsApplied> {
        let settings = self.settings.load().await?;
        self.apply.execute(session, settings).await
    }
}
