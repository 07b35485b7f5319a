use serde::Serialize;

use crate::ids::EntryId;
use crate::settings::{Settings, TopbarMode};

use super::preview::{topbar_label, truncate};
use super::store::HistoryStore;

/// One menu row, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryViewRow {
    pub id: EntryId,
    pub label: String,
    pub favorite: bool,
    pub selected: bool,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopbarView {
    pub icon_visible: bool,
    pub text_visible: bool,
    pub text: String,
    pub down_arrow_visible: bool,
}

/// Presentation snapshot derived from the session.
///
/// 会话的只读展示快照，由渲染层订阅。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryView {
    pub rows: Vec<HistoryViewRow>,
    pub history_visible: bool,
    pub favorites_visible: bool,
    pub topbar: TopbarView,
    pub delete_enabled: bool,
    pub private_mode: bool,
    /// Active search query, empty when no search is applied.
    pub search_query: String,
}

impl HistoryView {
    /// Build the view. `topbar_text` is the last text seen on the clipboard.
    pub fn build(
        store: &HistoryStore,
        settings: &Settings,
        private_mode: bool,
        topbar_text: Option<&str>,
    ) -> Self {
        let rows = store
            .display_order()
            .into_iter()
            .map(|entry| HistoryViewRow {
                id: entry.id().clone(),
                label: truncate(entry.content(), settings.display.preview_length),
                favorite: entry.is_favorite(),
                selected: entry.is_selected(),
                visible: entry.is_visible(),
            })
            .collect();

        let text = if private_mode {
            topbar_label(None, settings.display.topbar_preview_length)
        } else {
            topbar_label(topbar_text, settings.display.topbar_preview_length)
        };

        let mode = settings.display.topbar_mode;
        Self {
            rows,
            history_visible: !private_mode,
            favorites_visible: !private_mode,
            topbar: TopbarView {
                icon_visible: matches!(mode, TopbarMode::Icon | TopbarMode::Both),
                text_visible: matches!(mode, TopbarMode::Text | TopbarMode::Both),
                text,
                down_arrow_visible: !settings.display.disable_down_arrow,
            },
            delete_enabled: settings.history.delete_enabled,
            private_mode,
            search_query: String::new(),
        }
    }
}

impl Default for HistoryView {
    fn default() -> Self {
        Self::build(&HistoryStore::new(), &Settings::default(), false, None)
    }
}
