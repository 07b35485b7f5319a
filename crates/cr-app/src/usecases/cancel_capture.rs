use std::sync::Arc;

use anyhow::Result;
use cr_core::ports::{ClipboardPort, RegistryPort};
use cr_core::EntryId;
use tracing::{debug, info};

use super::{persist_registry, select_and_propagate, write_clipboard};
use crate::session::HistorySession;

/// The "Cancel" action of a capture notification.
///
/// 撤销刚刚捕获的条目。
///
/// # Behavior / 行为
/// - Only acts while the referenced entry is still the newest one; a later
///   capture or a removal makes the request stale and it is dropped.
/// - The entry before it is selected and written back to the clipboard, or
///   the clipboard is emptied when nothing remains.
///
/// - 仅当该条目仍是最新条目时生效，否则静默忽略。
/// - 选中前一个条目并写回剪贴板；无条目时清空剪贴板。
pub struct CancelCapture {
    clipboard: Arc<dyn ClipboardPort>,
    registry: Arc<dyn RegistryPort>,
}

impl CancelCapture {
    pub fn new(clipboard: Arc<dyn ClipboardPort>, registry: Arc<dyn RegistryPort>) -> Self {
        Self {
            clipboard,
            registry,
        }
    }

    #[tracing::instrument(name = "usecase.cancel_capture.execute", skip(self, session), fields(entry_id = %entry))]
    pub async fn execute(&self, session: &mut HistorySession, entry: &EntryId) -> Result<bool> {
        if !session.store().is_newest(entry) {
            debug!("Undo request no longer refers to the newest entry, dropped");
            return Ok(false);
        }

        session.store_mut().remove(entry)?;
        session.cancel_pending_for(entry);

        let previous = session.store().newest().map(|e| e.id().clone());
        match previous {
            Some(previous) => select_and_propagate(self.clipboard.as_ref(), session, &previous)?,
            None => write_clipboard(self.clipboard.as_ref(), session, ""),
        }
        persist_registry(self.registry.as_ref(), session).await;

        info!("Capture undone");
        Ok(true)
    }
}
