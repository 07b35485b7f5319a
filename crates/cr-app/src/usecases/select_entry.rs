use std::sync::Arc;

use anyhow::Result;
use cr_core::ports::ClipboardPort;
use cr_core::EntryId;
use tracing::info;

use super::{log_dropped, select_and_propagate};
use crate::session::HistorySession;

/// User activated an entry: select it and put it on the clipboard.
///
/// 用户激活条目：选中并写入剪贴板。
pub struct SelectEntry {
    clipboard: Arc<dyn ClipboardPort>,
}

impl SelectEntry {
    pub fn new(clipboard: Arc<dyn ClipboardPort>) -> Self {
        Self { clipboard }
    }

    /// Returns `false` when the reference is stale.
    #[tracing::instrument(name = "usecase.select_entry.execute", skip(self, session), fields(entry_id = %entry))]
    pub fn execute(&self, session: &mut HistorySession, entry: &EntryId) -> Result<bool> {
        session.cancel_pending();
        match select_and_propagate(self.clipboard.as_ref(), session, entry) {
            Ok(()) => {
                info!("Entry selected");
                Ok(true)
            }
            Err(err) => {
                log_dropped("select_entry", &err);
                Ok(false)
            }
        }
    }
}
