//! Mutable engine state owned by the runtime task.

use cr_core::history::{HistoryStore, HistoryView, SearchFilter, SelectionTracker};
use cr_core::ports::CancelHandle;
use cr_core::registry::RegistryRecord;
use cr_core::{EntryId, Settings};

/// A navigation waiting for its delayed clipboard write.
#[derive(Debug)]
pub struct PendingSelection {
    pub generation: u64,
    pub target: EntryId,
    handle: CancelHandle,
}

/// Everything one engine instance knows.
///
/// 单个引擎实例的全部状态，只由运行时任务持有。
#[derive(Debug)]
pub struct HistorySession {
    store: HistoryStore,
    settings: Settings,
    private_mode: bool,
    pending: Option<PendingSelection>,
    next_generation: u64,
    search_query: String,
    topbar_text: Option<String>,
}

impl HistorySession {
    pub fn new(settings: Settings) -> Self {
        Self {
            store: HistoryStore::new(),
            settings,
            private_mode: false,
            pending: None,
            next_generation: 0,
            search_query: String::new(),
            topbar_text: None,
        }
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut HistoryStore {
        &mut self.store
    }

    pub fn selection(&mut self) -> SelectionTracker<'_> {
        SelectionTracker::new(&mut self.store)
    }

    pub fn search(&mut self) -> SearchFilter<'_> {
        SearchFilter::new(&mut self.store)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Swap in a new snapshot, returning the previous one.
    pub fn replace_settings(&mut self, settings: Settings) -> Settings {
        std::mem::replace(&mut self.settings, settings)
    }

    pub fn is_private(&self) -> bool {
        self.private_mode
    }

    pub fn set_private(&mut self, private_mode: bool) {
        self.private_mode = private_mode;
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn topbar_text(&self) -> Option<&str> {
        self.topbar_text.as_deref()
    }

    /// Record the text last seen on (or written to) the clipboard.
    pub fn set_topbar_text(&mut self, text: Option<String>) {
        self.topbar_text = text.filter(|t| !t.is_empty());
    }

    /// Registry projection honouring `cache_only_favorites`.
    pub fn registry_snapshot(&self) -> Vec<RegistryRecord> {
        self.store
            .project_registry(self.settings.history.cache_only_favorites)
    }

    pub fn view(&self) -> HistoryView {
        let mut view = HistoryView::build(
            &self.store,
            &self.settings,
            self.private_mode,
            self.topbar_text.as_deref(),
        );
        view.search_query = self.search_query.clone();
        view
    }

    pub fn pending(&self) -> Option<&PendingSelection> {
        self.pending.as_ref()
    }

    /// Reserve the generation number for the next delayed selection.
    pub fn next_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    /// Track a scheduled delayed selection. Any earlier one is cancelled.
    pub fn set_pending(&mut self, generation: u64, target: EntryId, handle: CancelHandle) {
        self.cancel_pending();
        self.pending = Some(PendingSelection {
            generation,
            target,
            handle,
        });
    }

    pub fn cancel_pending(&mut self) {
        if let Some(mut pending) = self.pending.take() {
            pending.handle.cancel();
        }
    }

    /// Cancel the pending selection only if it points at `id`.
    pub fn cancel_pending_for(&mut self, id: &EntryId) {
        if self.pending.as_ref().is_some_and(|p| &p.target == id) {
            self.cancel_pending();
        }
    }

    /// Claim the pending target if `generation` is still the current one.
    pub fn take_pending(&mut self, generation: u64) -> Option<EntryId> {
        match &self.pending {
            Some(pending) if pending.generation == generation => {
                self.pending.take().map(|p| p.target)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_handle(counter: &Arc<AtomicUsize>) -> CancelHandle {
        let counter = counter.clone();
        CancelHandle::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn set_pending_cancels_previous_task() {
        let cancelled = Arc::new(AtomicUsize::new(0));
        let mut session = HistorySession::new(Settings::default());

        let first = session.next_generation();
        session.set_pending(first, EntryId::from("a"), counting_handle(&cancelled));
        let second = session.next_generation();
        session.set_pending(second, EntryId::from("b"), counting_handle(&cancelled));

        assert_eq!(cancelled.load(Ordering::SeqCst), 1);
        assert_eq!(session.take_pending(first), None);
        assert_eq!(session.take_pending(second), Some(EntryId::from("b")));
        assert!(session.pending().is_none());
    }

    #[test]
    fn cancel_pending_for_ignores_other_targets() {
        let cancelled = Arc::new(AtomicUsize::new(0));
        let mut session = HistorySession::new(Settings::default());
        let generation = session.next_generation();
        session.set_pending(generation, EntryId::from("a"), counting_handle(&cancelled));

        session.cancel_pending_for(&EntryId::from("other"));
        assert!(session.pending().is_some());

        session.cancel_pending_for(&EntryId::from("a"));
        assert!(session.pending().is_none());
        assert_eq!(cancelled.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn registry_snapshot_respects_cache_only_favorites() {
        let mut settings = Settings::default();
        settings.history.cache_only_favorites = true;
        let mut session = HistorySession::new(settings);
        session.store_mut().insert("plain", false).unwrap();
        session.store_mut().insert("pinned", true).unwrap();

        let records = session.registry_snapshot();
        assert_eq!(records, vec![RegistryRecord::new("pinned", true)]);
    }

    #[test]
    fn empty_topbar_text_is_treated_as_missing() {
        let mut session = HistorySession::new(Settings::default());
        session.set_topbar_text(Some(String::new()));
        assert_eq!(session.topbar_text(), None);
        assert_eq!(session.view().topbar.text, "...");
    }
}
