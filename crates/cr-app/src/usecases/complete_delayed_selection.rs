use std::sync::Arc;

use anyhow::Result;
use cr_core::ports::ClipboardPort;
use tracing::debug;

use super::{log_dropped, select_and_propagate};
use crate::session::HistorySession;

/// A delayed selection fired: write its target to the clipboard.
///
/// Firings whose generation is no longer pending were cancelled after the
/// timer had already delivered them and are ignored.
pub struct CompleteDelayedSelection {
    clipboard: Arc<dyn ClipboardPort>,
}

impl CompleteDelayedSelection {
    pub fn new(clipboard: Arc<dyn ClipboardPort>) -> Self {
        Self { clipboard }
    }

    #[tracing::instrument(name = "usecase.complete_delayed_selection.execute", skip(self, session))]
    pub fn execute(&self, session: &mut HistorySession, generation: u64) -> Result<bool> {
        let Some(target) = session.take_pending(generation) else {
            debug!("Stale delayed selection ignored");
            return Ok(false);
        };

        match select_and_propagate(self.clipboard.as_ref(), session, &target) {
            Ok(()) => Ok(true),
            Err(err) => {
                log_dropped("complete_delayed_selection", &err);
                Ok(false)
            }
        }
    }
}
