use thiserror::Error;

use crate::ids::EntryId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// The content is already stored; callers reselect the existing entry instead.
    #[error("content already present in history")]
    DuplicateContent,

    /// The reference is stale, e.g. the entry was removed by a clear-all.
    #[error("history entry not found: {0}")]
    NotFound(EntryId),

    #[error("history entries cannot be empty")]
    EmptyContent,
}

impl HistoryError {
    /// Errors that callers drop without surfacing to the user.
    pub fn is_benign(&self) -> bool {
        matches!(self, HistoryError::DuplicateContent | HistoryError::NotFound(_))
    }
}
