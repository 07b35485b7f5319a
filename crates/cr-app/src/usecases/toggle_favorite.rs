use std::sync::Arc;

use anyhow::Result;
use cr_core::ports::RegistryPort;
use cr_core::EntryId;
use tracing::info;

use super::{log_dropped, persist_registry};
use crate::session::HistorySession;

/// Pin or unpin an entry.
///
/// Unpinning can push the history partition over capacity, so the store is
/// evicted again before persisting.
pub struct ToggleFavorite {
    registry: Arc<dyn RegistryPort>,
}

impl ToggleFavorite {
    pub fn new(registry: Arc<dyn RegistryPort>) -> Self {
        Self { registry }
    }

    /// Returns the new favorite flag, `None` for a stale reference.
    #[tracing::instrument(name = "usecase.toggle_favorite.execute", skip(self, session), fields(entry_id = %entry))]
    pub async fn execute(
        &self,
        session: &mut HistorySession,
        entry: &EntryId,
    ) -> Result<Option<bool>> {
        let favorite = match session.store_mut().toggle_favorite(entry) {
            Ok(favorite) => favorite,
            Err(err) => {
                log_dropped("toggle_favorite", &err);
                return Ok(None);
            }
        };

        let max_len = session.settings().history.max_registry_length;
        session.store_mut().evict_oldest(max_len);
        persist_registry(self.registry.as_ref(), session).await;

        info!(favorite, "Favorite toggled");
        Ok(Some(favorite))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::Fakes;
    use cr_core::registry::RegistryRecord;
    use cr_core::Settings;

    #[tokio::test]
    async fn toggling_moves_entry_and_persists() {
        let fakes = Fakes::new();
        let mut session = HistorySession::new(Settings::default());
        let a = session.store_mut().insert("a", false).unwrap();
        session.store_mut().insert("b", false).unwrap();

        let favorite = ToggleFavorite::new(fakes.registry.clone())
            .execute(&mut session, &a)
            .await
            .unwrap();

        assert_eq!(favorite, Some(true));
        assert_eq!(
            fakes.registry.last_saved(),
            Some(vec![RegistryRecord::new("b", false), RegistryRecord::new("a", true)])
        );
    }

    #[tokio::test]
    async fn unpinning_respects_capacity() {
        let fakes = Fakes::new();
        let mut settings = Settings::default();
        settings.history.max_registry_length = 1;
        let mut session = HistorySession::new(settings);
        let pinned = session.store_mut().insert("pinned", true).unwrap();
        session.store_mut().insert("plain", false).unwrap();

        ToggleFavorite::new(fakes.registry.clone())
            .execute(&mut session, &pinned)
            .await
            .unwrap();

        let history: Vec<&str> = session.store().history().iter().map(|e| e.content()).collect();
        assert_eq!(history, vec!["pinned"]);
    }

    #[tokio::test]
    async fn stale_reference_is_dropped() {
        let fakes = Fakes::new();
        let mut session = HistorySession::new(Settings::default());

        let result = ToggleFavorite::new(fakes.registry.clone())
            .execute(&mut session, &EntryId::from("gone"))
            .await
            .unwrap();

        assert_eq!(result, None);
        assert_eq!(fakes.registry.save_count(), 0);
    }
}
