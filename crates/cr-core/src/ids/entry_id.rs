use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Stable reference to an entry held by the history store.
///
/// Ids are never reused; an id whose entry was removed is stale and every
/// store operation taking it reports `HistoryError::NotFound`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl_id!(EntryId);
