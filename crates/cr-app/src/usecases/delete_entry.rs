use std::sync::Arc;

use anyhow::Result;
use cr_core::ports::{ClipboardPort, RegistryPort};
use cr_core::EntryId;
use tracing::info;

use super::{log_dropped, persist_registry, write_clipboard};
use crate::session::HistorySession;

/// Remove one entry on user request.
///
/// 删除单个条目。
///
/// # Behavior / 行为
/// - Deleting the selected entry empties the system clipboard.
/// - A pending delayed selection pointing at the entry is cancelled.
/// - Stale references are ignored.
///
/// - 删除选中条目时清空系统剪贴板。
/// - 取消指向该条目的延迟选中。
/// - 忽略失效引用。
pub struct DeleteEntry {
    clipboard: Arc<dyn ClipboardPort>,
    registry: Arc<dyn RegistryPort>,
}

impl DeleteEntry {
    pub fn new(clipboard: Arc<dyn ClipboardPort>, registry: Arc<dyn RegistryPort>) -> Self {
        Self {
            clipboard,
            registry,
        }
    }

    #[tracing::instrument(name = "usecase.delete_entry.execute", skip(self, session), fields(entry_id = %entry))]
    pub async fn execute(&self, session: &mut HistorySession, entry: &EntryId) -> Result<bool> {
        let removed = match session.store_mut().remove(entry) {
            Ok(removed) => removed,
            Err(err) => {
                log_dropped("delete_entry", &err);
                return Ok(false);
            }
        };
        session.cancel_pending_for(entry);

        if removed.is_selected() {
            write_clipboard(self.clipboard.as_ref(), session, "");
        }
        persist_registry(self.registry.as_ref(), session).await;

        info!(was_selected = removed.is_selected(), "History entry deleted");
        Ok(true)
    }
}
