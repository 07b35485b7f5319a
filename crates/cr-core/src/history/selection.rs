use crate::ids::EntryId;

use super::error::HistoryError;
use super::store::HistoryStore;

/// Navigation direction over the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Where the single selection currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Unselected,
    /// Index into the display order (history first, then favorites).
    SelectedAt(usize),
}

/// Result of a navigation step: the entry to select next and its 1-based
/// position in the display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStep {
    pub target: EntryId,
    pub position: usize,
    pub total: usize,
}

/// Enforces the single-selection invariant over a [`HistoryStore`].
///
/// 单选约束：任意时刻最多一个条目被选中。
///
/// The tracker only marks entries. Writing the selected text back to the
/// system clipboard is up to the caller.
pub struct SelectionTracker<'a> {
    store: &'a mut HistoryStore,
}

impl<'a> SelectionTracker<'a> {
    pub fn new(store: &'a mut HistoryStore) -> Self {
        Self { store }
    }

    pub fn state(&self) -> SelectionState {
        self.store
            .display_order()
            .iter()
            .position(|entry| entry.is_selected())
            .map_or(SelectionState::Unselected, SelectionState::SelectedAt)
    }

    /// Select the entry holding exactly `content`, clearing every other mark.
    ///
    /// Returns `None` and leaves the selection untouched when no entry matches.
    pub fn select_by_content(&mut self, content: &str) -> Option<EntryId> {
        let id = self.store.find_by_content(content)?.id().clone();
        self.mark(&id);
        Some(id)
    }

    /// Select an entry by reference.
    pub fn select(&mut self, id: &EntryId) -> Result<(), HistoryError> {
        if self.store.get(id).is_none() {
            return Err(HistoryError::NotFound(id.clone()));
        }
        self.mark(id);
        Ok(())
    }

    pub fn clear(&mut self) {
        for entry in self.store.entries_mut() {
            entry.selected = false;
        }
    }

    /// Compute the neighbour of the selected entry, wrapping at both ends.
    ///
    /// Nothing is marked here; the caller decides whether the target is
    /// selected immediately or after a delay. Returns `None` when nothing is
    /// selected.
    pub fn step(&self, direction: Direction) -> Option<NavigationStep> {
        let order = self.store.display_order();
        let current = order.iter().position(|entry| entry.is_selected())?;
        let total = order.len();

        let index = match direction {
            Direction::Next => (current + 1) % total,
            Direction::Previous => (current + total - 1) % total,
        };

        Some(NavigationStep {
            target: order[index].id().clone(),
            position: index + 1,
            total,
        })
    }

    fn mark(&mut self, id: &EntryId) {
        for entry in self.store.entries_mut() {
            entry.selected = entry.id() == id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(items: &[&str]) -> HistoryStore {
        let mut store = HistoryStore::new();
        for item in items {
            store.insert(*item, false).unwrap();
        }
        store
    }

    fn selected_count(store: &HistoryStore) -> usize {
        store.entries().iter().filter(|e| e.is_selected()).count()
    }

    #[test]
    fn select_by_content_keeps_single_selection() {
        let mut store = store_with(&["a", "b", "c"]);
        let mut tracker = SelectionTracker::new(&mut store);

        tracker.select_by_content("a").unwrap();
        tracker.select_by_content("c").unwrap();

        assert_eq!(tracker.state(), SelectionState::SelectedAt(0));
        assert_eq!(selected_count(&store), 1);
        assert_eq!(store.selected().unwrap().content(), "c");
    }

    #[test]
    fn select_by_unknown_content_changes_nothing() {
        let mut store = store_with(&["a"]);
        let mut tracker = SelectionTracker::new(&mut store);
        tracker.select_by_content("a");

        assert!(tracker.select_by_content("zzz").is_none());
        assert_eq!(store.selected().unwrap().content(), "a");
    }

    #[test]
    fn select_stale_reference_is_not_found() {
        let mut store = store_with(&["a"]);
        let id = store.newest().unwrap().id().clone();
        store.remove(&id).unwrap();

        let mut tracker = SelectionTracker::new(&mut store);
        assert_eq!(tracker.select(&id), Err(HistoryError::NotFound(id.clone())));
    }

    #[test]
    fn step_wraps_in_both_directions() {
        // display order: c, b, a, fav
        let mut store = store_with(&["a", "b", "c"]);
        store.insert("fav", true).unwrap();
        let mut tracker = SelectionTracker::new(&mut store);
        tracker.select_by_content("fav");

        let next = tracker.step(Direction::Next).unwrap();
        assert_eq!((next.position, next.total), (1, 4));
        tracker.select(&next.target).unwrap();
        assert_eq!(tracker.state(), SelectionState::SelectedAt(0));

        let previous = tracker.step(Direction::Previous).unwrap();
        assert_eq!((previous.position, previous.total), (4, 4));
        assert_eq!(store.get(&previous.target).unwrap().content(), "fav");
    }

    #[test]
    fn step_without_selection_is_a_no_op() {
        let mut store = store_with(&["a", "b"]);
        let tracker = SelectionTracker::new(&mut store);

        assert!(tracker.step(Direction::Next).is_none());
        assert_eq!(tracker.state(), SelectionState::Unselected);
    }

    #[test]
    fn step_over_single_entry_returns_itself() {
        let mut store = store_with(&["only"]);
        let mut tracker = SelectionTracker::new(&mut store);
        let id = tracker.select_by_content("only").unwrap();

        let step = tracker.step(Direction::Previous).unwrap();
        assert_eq!(step.target, id);
        assert_eq!((step.position, step.total), (1, 1));
    }

    #[test]
    fn clear_removes_the_mark() {
        let mut store = store_with(&["a"]);
        let mut tracker = SelectionTracker::new(&mut store);
        tracker.select_by_content("a");
        tracker.clear();

        assert!(store.selected().is_none());
    }
}
