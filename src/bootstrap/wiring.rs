//! # Dependency Injection / 依赖注入模块
//!
//! The only place that knows every concrete adapter. It assembles them into
//! [`EngineDeps`] and makes no decisions beyond that.
//!
//! 唯一同时依赖 cr-infra、cr-platform 与 cr-app 的地方，仅负责组装。

use std::sync::Arc;

use cr_app::{AppPaths, EngineDeps};
use cr_core::ports::{Notification, ScheduledTask};
use cr_infra::{FileRegistryRepository, FileSettingsRepository, TokioScheduler};
use cr_platform::{LocalClipboard, LogNotifier};
use tokio::sync::mpsc;

/// Errors during dependency injection
/// 依赖注入错误（平台初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),
}

/// Everything the runtime and the console need besides settings.
pub struct WiredEngine {
    pub deps: EngineDeps,
    pub settings_repo: Arc<FileSettingsRepository>,
    pub task_rx: mpsc::UnboundedReceiver<ScheduledTask>,
    pub notifications: mpsc::UnboundedReceiver<Notification>,
}

/// Build the engine's ports against the real system.
///
/// Must run inside a tokio runtime (the scheduler spawns tasks).
pub fn wire_engine(paths: &AppPaths) -> Result<WiredEngine, WiringError> {
    let clipboard =
        LocalClipboard::new().map_err(|e| WiringError::ClipboardInit(e.to_string()))?;
    let settings_repo = Arc::new(FileSettingsRepository::new(&paths.settings_path));
    let (notifier, notifications) = LogNotifier::with_feed();
    let (scheduler, task_rx) = TokioScheduler::channel();

    let deps = EngineDeps {
        clipboard: Arc::new(clipboard),
        registry: Arc::new(FileRegistryRepository::new(&paths.registry_path)),
        settings: settings_repo.clone(),
        notifier: Arc::new(notifier),
        scheduler: Arc::new(scheduler),
    };

    Ok(WiredEngine {
        deps,
        settings_repo,
        task_rx,
        notifications,
    })
}
