//! History engine use cases
//! 历史引擎用例
//!
//! Each use case holds the ports it needs and mutates a [`HistorySession`]
//! passed in by the runtime. Every mutation is followed by a full registry
//! write; persistence failures are logged and never abort the operation.
//!
//! [ClipboardPort owner change / polling tick]
//         ↓
// CaptureClipboard ──→ HistoryStore (insert / reselect / evict)
//         ↓
// RegistryPort.save + NotificationPort.notify

use cr_core::history::HistoryError;
use cr_core::ports::{ClipboardPort, RegistryPort};
use cr_core::EntryId;
use tracing::{debug, warn};

use crate::session::HistorySession;

pub mod apply_settings;
pub mod cancel_capture;
pub mod capture_clipboard;
pub mod clear_history;
pub mod complete_delayed_selection;
pub mod delete_entry;
pub mod load_history;
pub mod navigate_history;
pub mod search_history;
pub mod select_entry;
pub mod set_private_mode;
pub mod toggle_favorite;
pub mod update_settings;

pub use apply_settings::{ApplySettings, ReloadSettings, SettingsApplied};
pub use cancel_capture::CancelCapture;
pub use capture_clipboard::{CaptureClipboard, CaptureOutcome};
pub use clear_history::{ClearHistory, ClearOutcome};
pub use complete_delayed_selection::CompleteDelayedSelection;
pub use delete_entry::DeleteEntry;
pub use load_history::LoadHistory;
pub use navigate_history::NavigateHistory;
pub use search_history::SearchHistory;
pub use select_entry::SelectEntry;
pub use set_private_mode::SetPrivateMode;
pub use toggle_favorite::ToggleFavorite;
pub use update_settings::UpdateSettings;

/// Write the registry projection, logging instead of failing.
pub(crate) async fn persist_registry(registry: &dyn RegistryPort, session: &HistorySession) {
    let records = session.registry_snapshot();
    if let Err(err) = registry.save(&records).await {
        warn!(error = %err, records = records.len(), "Failed to persist history registry");
    }
}

/// Write text to the system clipboard and remember it for the topbar.
pub(crate) fn write_clipboard(
    clipboard: &dyn ClipboardPort,
    session: &mut HistorySession,
    text: &str,
) {
    if let Err(err) = clipboard.write_text(text) {
        warn!(error = %err, "Failed to write system clipboard");
    }
    session.set_topbar_text(Some(text.to_string()));
}

/// Select `id` and, outside private mode, put its content on the clipboard.
pub(crate) fn select_and_propagate(
    clipboard: &dyn ClipboardPort,
    session: &mut HistorySession,
    id: &EntryId,
) -> Result<(), HistoryError> {
    session.selection().select(id)?;
    if session.is_private() {
        debug!(entry_id = %id, "Private mode on, clipboard left untouched");
        return Ok(());
    }

    let content = session
        .store()
        .get(id)
        .map(|entry| entry.content().to_string())
        .ok_or_else(|| HistoryError::NotFound(id.clone()))?;
    write_clipboard(clipboard, session, &content);
    Ok(())
}

/// Log a stale-reference drop. Anything else is unexpected and logged louder.
pub(crate) fn log_dropped(operation: &'static str, err: &HistoryError) {
    if err.is_benign() {
        debug!(operation, error = %err, "Dropping request for stale entry");
    } else {
        warn!(operation, error = %err, "History request rejected");
    }
}
