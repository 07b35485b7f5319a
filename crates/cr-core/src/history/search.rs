use super::store::HistoryStore;

/// Visibility filter over the store.
///
/// Only the `visible` flag is touched: order, content, favorite and selection
/// marks stay as they are.
pub struct SearchFilter<'a> {
    store: &'a mut HistoryStore,
}

impl<'a> SearchFilter<'a> {
    pub fn new(store: &'a mut HistoryStore) -> Self {
        Self { store }
    }

    /// Show entries whose content contains `query`, ignoring case.
    /// An empty query shows everything. Returns the number of visible entries.
    pub fn apply_filter(&mut self, query: &str) -> usize {
        let needle = query.to_lowercase();
        let mut visible = 0;
        for entry in self.store.entries_mut() {
            entry.visible = needle.is_empty() || entry.content().to_lowercase().contains(&needle);
            if entry.visible {
                visible += 1;
            }
        }
        visible
    }

    pub fn reset(&mut self) {
        self.apply_filter("");
    }
}
