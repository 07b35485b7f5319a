use std::sync::Arc;

use anyhow::Result;
use cr_core::ports::{Notification, NotificationPort, RegistryPort};
use tracing::{info, info_span, Instrument};

use super::persist_registry;
use crate::session::HistorySession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// `confirm_on_clear` is on and the request was not confirmed.
    ConfirmationRequired,
    Cleared { removed: usize },
}

/// Clear-all: drop every history entry except the selected one.
///
/// The selected entry survives; the clipboard still holds its text.
/// Favorites are untouched.
pub struct ClearHistory {
    registry: Arc<dyn RegistryPort>,
    notifier: Arc<dyn NotificationPort>,
}

impl ClearHistory {
    pub fn new(registry: Arc<dyn RegistryPort>, notifier: Arc<dyn NotificationPort>) -> Self {
        Self { registry, notifier }
    }

    pub async fn execute(
        &self,
        session: &mut HistorySession,
        confirmed: bool,
    ) -> Result<ClearOutcome> {
        let span = info_span!("usecase.clear_history.execute", confirmed);

        async {
            if session.settings().history.confirm_on_clear && !confirmed {
                info!("Clear-all needs confirmation");
                return Ok(ClearOutcome::ConfirmationRequired);
            }

            let removed = session.store_mut().clear_history();
            for entry in &removed {
                session.cancel_pending_for(entry.id());
            }
            persist_registry(self.registry.as_ref(), session).await;
            self.notifier
                .notify(Notification::new("Clipboard history cleared"));

            info!(removed = removed.len(), "History cleared");
            Ok(ClearOutcome::Cleared {
                removed: removed.len(),
            })
        }
        .instrument(span)
        .await
    }
}
