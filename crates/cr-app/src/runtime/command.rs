use cr_core::{EntryId, Settings};
use tokio::sync::oneshot;

use crate::usecases::{ClearOutcome, SettingsApplied};

/// Requests a host can make of the engine.
#[derive(Debug)]
pub enum EngineCommand {
    /// Re-read the clipboard now, as a capture trigger would.
    Refresh,
    /// Activate an entry (select and write to the clipboard).
    Select(EntryId),
    SelectNext,
    SelectPrevious,
    ToggleFavorite(EntryId),
    Delete(EntryId),
    ClearHistory {
        confirmed: bool,
        reply: Option<oneshot::Sender<ClearOutcome>>,
    },
    /// "Cancel" action of a capture notification.
    UndoCapture(EntryId),
    SetPrivateMode(bool),
    Search(String),
    /// The host opened its menu; drop the active search.
    ResetSearch,
    /// Settings storage changed; re-read it.
    ReloadSettings,
    UpdateSettings {
        settings: Settings,
        reply: oneshot::Sender<anyhow::Result<SettingsApplied>>,
    },
    Shutdown,
}
