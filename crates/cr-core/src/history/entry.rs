use crate::ids::EntryId;

/// One captured clipboard text value.
///
/// `content` is fixed at creation and is the dedup key across the whole store.
/// `selected` is only changed through [`SelectionTracker`](super::SelectionTracker)
/// and store removals; `visible` is a view toggle owned by
/// [`SearchFilter`](super::SearchFilter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    content: String,
    pub(crate) favorite: bool,
    pub(crate) selected: bool,
    pub(crate) visible: bool,
}

impl Entry {
    pub(crate) fn new(content: String, favorite: bool) -> Self {
        Self {
            id: EntryId::new(),
            content,
            favorite,
            selected: false,
            visible: true,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
