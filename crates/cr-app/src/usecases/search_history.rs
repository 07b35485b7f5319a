use tracing::debug;

use crate::session::HistorySession;

/// Apply a search query to the view. Entries are never reordered or removed.
///
/// The query is remembered by the session and published with the view;
/// entries captured later start out visible until the query changes again.
/// An empty query shows everything. [`SearchHistory::reset`] runs when a host
/// opens its menu.
#[derive(Debug, Default)]
pub struct SearchHistory;

impl SearchHistory {
    pub fn new() -> Self {
        Self
    }

    /// Returns the number of visible entries.
    pub fn execute(&self, session: &mut HistorySession, query: &str) -> usize {
        let visible = session.search().apply_filter(query);
        session.set_search_query(query);
        debug!(query_len = query.chars().count(), visible, "Search applied");
        visible
    }

    /// Forget the active query and show every entry.
    pub fn reset(&self, session: &mut HistorySession) {
        session.search().reset();
        session.set_search_query(String::new());
        debug!("Search reset");
    }
}
