use crate::ids::EntryId;
use crate::registry::{PersistedRecord, RegistryRecord};

use super::entry::Entry;
use super::error::HistoryError;

/// Ordered collection of history entries.
///
/// Entries are kept in a single recency sequence, oldest touched first and
/// newest touched last. The *favorites* and *history* partitions are views
/// over that sequence, both read most-recent-first. The persisted registry
/// uses the same order.
///
/// The store never evicts on its own: callers run [`HistoryStore::evict_oldest`]
/// explicitly after inserting.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<Entry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in recency order (oldest touched first).
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [Entry] {
        &mut self.entries
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn find_by_content(&self, content: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.content() == content)
    }

    /// Position in the recency sequence, `len() - 1` being the newest.
    pub fn position_of(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    /// The most recently inserted or moved entry.
    pub fn newest(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn is_newest(&self, id: &EntryId) -> bool {
        self.newest().is_some_and(|entry| entry.id() == id)
    }

    /// Non-favorite entries, most recent first.
    pub fn history(&self) -> Vec<&Entry> {
        self.entries.iter().rev().filter(|e| !e.is_favorite()).collect()
    }

    /// Favorite entries, most recent first.
    pub fn favorites(&self) -> Vec<&Entry> {
        self.entries.iter().rev().filter(|e| e.is_favorite()).collect()
    }

    pub fn history_len(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_favorite()).count()
    }

    /// History partition followed by the favorites partition.
    pub fn display_order(&self) -> Vec<&Entry> {
        let mut ordered = self.history();
        ordered.extend(self.favorites());
        ordered
    }

    pub fn selected(&self) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.is_selected())
    }

    /// Add a new entry at the front of its partition.
    pub fn insert(
        &mut self,
        content: impl Into<String>,
        favorite: bool,
    ) -> Result<EntryId, HistoryError> {
        let content = content.into();
        if content.is_empty() {
            return Err(HistoryError::EmptyContent);
        }
        if self.find_by_content(&content).is_some() {
            return Err(HistoryError::DuplicateContent);
        }

        let entry = Entry::new(content, favorite);
        let id = entry.id().clone();
        self.entries.push(entry);
        Ok(id)
    }

    /// Remove an entry. Its selection goes with it and is not handed to
    /// another entry; the returned value still reports whether it was selected.
    pub fn remove(&mut self, id: &EntryId) -> Result<Entry, HistoryError> {
        let index = self
            .position_of(id)
            .ok_or_else(|| HistoryError::NotFound(id.clone()))?;
        Ok(self.entries.remove(index))
    }

    /// Flip the favorite flag and move the entry to the front of the partition
    /// it now belongs to. Returns the new flag.
    pub fn toggle_favorite(&mut self, id: &EntryId) -> Result<bool, HistoryError> {
        let index = self
            .position_of(id)
            .ok_or_else(|| HistoryError::NotFound(id.clone()))?;
        let mut entry = self.entries.remove(index);
        entry.favorite = !entry.favorite;
        let favorite = entry.favorite;
        self.entries.push(entry);
        Ok(favorite)
    }

    /// Move an entry to the front of its partition, keeping its flags.
    pub fn move_first(&mut self, id: &EntryId) -> Result<(), HistoryError> {
        let index = self
            .position_of(id)
            .ok_or_else(|| HistoryError::NotFound(id.clone()))?;
        let entry = self.entries.remove(index);
        self.entries.push(entry);
        Ok(())
    }

    /// Drop the oldest non-favorite entries until the history partition holds
    /// at most `max_len` entries.
    ///
    /// Favorites are never touched. The selected entry gets no protection: when
    /// it is the oldest non-favorite it is evicted like any other.
    pub fn evict_oldest(&mut self, max_len: usize) -> Vec<Entry> {
        let mut evicted = Vec::new();
        while self.history_len() > max_len {
            let Some(index) = self.entries.iter().position(|e| !e.is_favorite()) else {
                break;
            };
            evicted.push(self.entries.remove(index));
        }

        #[cfg(feature = "tracing")]
        if !evicted.is_empty() {
            tracing::debug!(evicted = evicted.len(), max_len, "Evicted oldest history entries");
        }

        evicted
    }

    /// Remove every history entry except the selected one. Favorites stay.
    pub fn clear_history(&mut self) -> Vec<Entry> {
        let (removed, kept): (Vec<Entry>, Vec<Entry>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| !e.is_favorite() && !e.is_selected());
        self.entries = kept;
        removed
    }

    /// Durable projection in recency order. Selection and visibility are
    /// never part of it.
    pub fn project_registry(&self, favorites_only: bool) -> Vec<RegistryRecord> {
        self.entries
            .iter()
            .filter(|entry| !favorites_only || entry.is_favorite())
            .map(|entry| RegistryRecord::new(entry.content(), entry.is_favorite()))
            .collect()
    }

    /// Replace the store's contents with persisted records.
    ///
    /// Legacy string records become non-favorite entries. Empty or repeated
    /// contents are skipped one by one rather than failing the load. Nothing
    /// is selected afterwards. Returns the number of entries loaded.
    pub fn load_from<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = PersistedRecord>,
    {
        self.entries.clear();
        for record in records {
            let RegistryRecord { contents, favorite } = record.normalize();
            if let Err(_err) = self.insert(contents, favorite) {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "Skipping persisted history record");
            }
        }
        self.entries.len()
    }
}
