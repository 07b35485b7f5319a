use std::sync::Arc;

use anyhow::Result;
use cr_core::ports::{ClipboardPort, RegistryPort};
use tracing::{info, info_span, warn, Instrument};

use super::{persist_registry, select_and_propagate};
use crate::session::HistorySession;

/// Startup: fill the store from the persisted registry.
///
/// 启动时从持久化的注册表加载历史。
///
/// # Behavior / 行为
/// - A registry that cannot be read starts an empty history.
/// - The store is evicted to capacity; the registry is rewritten only if that
///   removed anything.
/// - The newest entry is selected and written to the clipboard.
///
/// - 注册表读取失败时以空历史启动。
/// - 按容量淘汰，仅当有条目被淘汰时回写注册表。
/// - 选中最新条目并写入剪贴板。
pub struct LoadHistory {
    clipboard: Arc<dyn ClipboardPort>,
    registry: Arc<dyn RegistryPort>,
}

impl LoadHistory {
    pub fn new(clipboard: Arc<dyn ClipboardPort>, registry: Arc<dyn RegistryPort>) -> Self {
        Self {
            clipboard,
            registry,
        }
    }

    /// Returns the number of entries in the store afterwards.
    pub async fn execute(&self, session: &mut HistorySession) -> Result<usize> {
        let span = info_span!("usecase.load_history.execute");

        async {
            let records = match self.registry.load().await {
                Ok(records) => records,
                Err(err) => {
                    warn!(error = %err, "Failed to load history registry, starting empty");
                    Vec::new()
                }
            };

            let loaded = session.store_mut().load_from(records);
            let max_len = session.settings().history.max_registry_length;
            let evicted = session.store_mut().evict_oldest(max_len);
            if !evicted.is_empty() {
                persist_registry(self.registry.as_ref(), session).await;
            }

            let newest = session.store().newest().map(|entry| entry.id().clone());
            if let Some(newest) = newest {
                select_and_propagate(self.clipboard.as_ref(), session, &newest)?;
            }

            info!(
                loaded,
                evicted = evicted.len(),
                favorites = session.store().favorites().len(),
                "History loaded"
            );
            Ok(session.store().len())
        }
        .instrument(span)
        .await
    }
}
