use std::sync::Arc;

use anyhow::Result;
use cr_core::ports::ClipboardPort;
use tracing::{info, warn};

use super::{select_and_propagate, write_clipboard};
use crate::session::HistorySession;

/// Enter or leave private mode.
///
/// 切换私密模式。
///
/// # Behavior / 行为
/// - Entering suspends capture and hides the history in the view.
/// - Leaving puts the selected entry back on the clipboard, or empties the
///   clipboard when nothing is selected, then refreshes the topbar text from
///   a fresh read.
///
/// - 进入：暂停捕获，视图隐藏历史。
/// - 退出：将选中条目写回剪贴板（无选中则清空），再读取剪贴板刷新顶栏文字。
pub struct SetPrivateMode {
    clipboard: Arc<dyn ClipboardPort>,
}

impl SetPrivateMode {
    pub fn new(clipboard: Arc<dyn ClipboardPort>) -> Self {
        Self { clipboard }
    }

    /// Returns `false` when the session was already in the requested mode.
    #[tracing::instrument(name = "usecase.set_private_mode.execute", skip(self, session))]
    pub fn execute(&self, session: &mut HistorySession, enabled: bool) -> Result<bool> {
        if session.is_private() == enabled {
            return Ok(false);
        }
        session.set_private(enabled);

        if enabled {
            info!("Private mode on");
            return Ok(true);
        }

        let topbar = match self.clipboard.read_text() {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "Failed to read clipboard for topbar refresh");
                None
            }
        };
        session.set_topbar_text(topbar);

        let selected = session.store().selected().map(|e| e.id().clone());
        match selected {
            Some(selected) => select_and_propagate(self.clipboard.as_ref(), session, &selected)?,
            None => write_clipboard(self.clipboard.as_ref(), session, ""),
        }

        info!("Private mode off");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::Fakes;
    use cr_core::Settings;

    #[test]
    fn entering_hides_history_and_topbar() {
        let fakes = Fakes::new();
        let mut session = HistorySession::new(Settings::default());
        session.set_topbar_text(Some("visible".to_string()));

        assert!(SetPrivateMode::new(fakes.clipboard.clone()).execute(&mut session, true).unwrap());

        let view = session.view();
        assert!(!view.history_visible);
        assert!(!view.favorites_visible);
        assert_eq!(view.topbar.text, "...");
        assert!(fakes.clipboard.writes().is_empty());
    }

    #[test]
    fn leaving_restores_selected_entry() {
        let fakes = Fakes::new();
        let mut session = HistorySession::new(Settings::default());
        let id = session.store_mut().insert("restore me", false).unwrap();
        session.selection().select(&id).unwrap();
        let private = SetPrivateMode::new(fakes.clipboard.clone());
        private.execute(&mut session, true).unwrap();
        fakes.clipboard.set("typed in private");

        private.execute(&mut session, false).unwrap();

        assert_eq!(fakes.clipboard.writes(), vec!["restore me"]);
        assert_eq!(session.view().topbar.text, "restore me");
        assert!(session.view().history_visible);
    }

    #[test]
    fn leaving_without_selection_empties_clipboard() {
        let fakes = Fakes::new();
        let mut session = HistorySession::new(Settings::default());
        let private = SetPrivateMode::new(fakes.clipboard.clone());
        private.execute(&mut session, true).unwrap();

        private.execute(&mut session, false).unwrap();

        assert_eq!(fakes.clipboard.writes(), vec![""]);
    }

    #[test]
    fn repeating_the_current_mode_does_nothing() {
        let fakes = Fakes::new();
        let mut session = HistorySession::new(Settings::default());

        assert!(!SetPrivateMode::new(fakes.clipboard.clone()).execute(&mut session, false).unwrap());
        assert!(fakes.clipboard.writes().is_empty());
    }
}
