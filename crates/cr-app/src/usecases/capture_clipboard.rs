use std::sync::Arc;

use anyhow::Result;
use cr_core::history::HistoryError;
use cr_core::ports::{
    ClipboardPort, Notification, NotificationAction, NotificationPort, RegistryPort,
};
use cr_core::EntryId;
use tracing::{debug, info, warn};

use super::persist_registry;
use crate::session::HistorySession;

/// What a capture trigger did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Private mode is on; the clipboard was not read.
    Suspended,
    /// No text could be read, or it was empty after stripping.
    NoText,
    /// New content became the newest, selected entry.
    Captured { entry: EntryId },
    /// Known content was selected again.
    Reselected { entry: EntryId, moved: bool },
    /// The content is already the most recently touched entry.
    Unchanged,
}

/// React to a clipboard change signal.
///
/// 响应剪贴板变更信号。
///
/// # Behavior / 行为
/// - Nothing is read in private mode.
/// - New text is inserted, selected without writing back, evicted to capacity,
///   persisted and announced with an undo action.
/// - Known text that is not the newest entry is reselected, and moved to the
///   front when move-item-first is on and the entry is not a favorite.
///
/// - 私密模式下不读取剪贴板。
/// - 新文本：插入、选中（不回写）、按容量淘汰、持久化并发送带撤销操作的通知。
/// - 已存在且非最新：重新选中；开启置顶且非收藏时移动到最前。
pub struct CaptureClipboard {
    clipboard: Arc<dyn ClipboardPort>,
    registry: Arc<dyn RegistryPort>,
    notifier: Arc<dyn NotificationPort>,
}

impl CaptureClipboard {
    pub fn new(
        clipboard: Arc<dyn ClipboardPort>,
        registry: Arc<dyn RegistryPort>,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            clipboard,
            registry,
            notifier,
        }
    }

    #[tracing::instrument(name = "usecase.capture_clipboard.execute", skip_all)]
    pub async fn execute(&self, session: &mut HistorySession) -> Result<CaptureOutcome> {
        if session.is_private() {
            return Ok(CaptureOutcome::Suspended);
        }

        let text = match self.clipboard.read_text() {
            Ok(Some(text)) => text,
            Ok(None) => return Ok(CaptureOutcome::NoText),
            Err(err) => {
                warn!(error = %err, "Failed to read system clipboard");
                return Ok(CaptureOutcome::NoText);
            }
        };
        let text = if session.settings().capture.strip_text {
            text.trim().to_string()
        } else {
            text
        };
        if text.is_empty() {
            return Ok(CaptureOutcome::NoText);
        }

        let existing = session
            .store()
            .find_by_content(&text)
            .map(|entry| (entry.id().clone(), entry.is_favorite()));

        let outcome = match existing {
            None => self.capture_new(session, text).await?,
            Some((entry, _)) if session.store().is_newest(&entry) => CaptureOutcome::Unchanged,
            Some((entry, favorite)) => {
                session.selection().select(&entry)?;
                let moved = !favorite && session.settings().history.move_item_first;
                if moved {
                    session.store_mut().move_first(&entry)?;
                }
                session.set_topbar_text(Some(text));
                persist_registry(self.registry.as_ref(), session).await;
                debug!(entry_id = %entry, moved, "Reselected existing history entry");
                CaptureOutcome::Reselected { entry, moved }
            }
        };

        Ok(outcome)
    }

    async fn capture_new(
        &self,
        session: &mut HistorySession,
        text: String,
    ) -> Result<CaptureOutcome, HistoryError> {
        let entry = session.store_mut().insert(text.clone(), false)?;
        session.selection().select(&entry)?;
        session.set_topbar_text(Some(text));

        let max_len = session.settings().history.max_registry_length;
        session.store_mut().evict_oldest(max_len);
        persist_registry(self.registry.as_ref(), session).await;

        info!(entry_id = %entry, history_len = session.store().history_len(), "Captured clipboard text");

        if session.settings().notifications.notify_on_copy {
            self.notifier.notify(
                Notification::new("Copied to clipboard").with_action(
                    NotificationAction::UndoCapture {
                        entry: entry.clone(),
                    },
                ),
            );
        }

        Ok(CaptureOutcome::Captured { entry })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::Fakes;
    use cr_core::registry::RegistryRecord;
    use cr_core::Settings;

    fn usecase(fakes: &Fakes) -> CaptureClipboard {
        CaptureClipboard::new(
            fakes.clipboard.clone(),
            fakes.registry.clone(),
            fakes.notifier.clone(),
        )
    }

    fn history(session: &HistorySession) -> Vec<String> {
        session
            .store()
            .history()
            .iter()
            .map(|e| e.content().to_string())
            .collect()
    }

    #[tokio::test]
    async fn new_text_is_captured_selected_and_announced() {
        let fakes = Fakes::new();
        let mut session = HistorySession::new(Settings::default());
        fakes.clipboard.set("hello");

        let outcome = usecase(&fakes).execute(&mut session).await.unwrap();

        let CaptureOutcome::Captured { entry } = outcome else {
            panic!("expected capture, got {outcome:?}");
        };
        assert!(session.store().get(&entry).unwrap().is_selected());
        assert!(fakes.clipboard.writes().is_empty());
        assert_eq!(
            fakes.registry.last_saved(),
            Some(vec![RegistryRecord::new("hello", false)])
        );

        let notification = fakes.notifier.last().unwrap();
        assert_eq!(notification.message, "Copied to clipboard");
        assert_eq!(
            notification.action,
            Some(NotificationAction::UndoCapture { entry })
        );
        assert_eq!(session.view().topbar.text, "hello");
    }

    #[tokio::test]
    async fn capture_evicts_oldest_and_keeps_favorites() {
        let fakes = Fakes::new();
        let mut settings = Settings::default();
        settings.history.max_registry_length = 2;
        let mut session = HistorySession::new(settings);
        session.store_mut().insert("x", true).unwrap();
        let capture = usecase(&fakes);

        for text in ["y", "z", "w"] {
            fakes.clipboard.set(text);
            capture.execute(&mut session).await.unwrap();
        }

        assert_eq!(history(&session), vec!["w", "z"]);
        assert_eq!(session.store().favorites().len(), 1);
        assert_eq!(session.store().selected().unwrap().content(), "w");
    }

    #[tokio::test]
    async fn recapture_reselects_without_writing() {
        let fakes = Fakes::new();
        let mut session = HistorySession::new(Settings::default());
        let capture = usecase(&fakes);
        for text in ["a", "b"] {
            fakes.clipboard.set(text);
            capture.execute(&mut session).await.unwrap();
        }

        fakes.clipboard.set("a");
        let outcome = capture.execute(&mut session).await.unwrap();

        assert!(matches!(outcome, CaptureOutcome::Reselected { moved: false, .. }));
        assert_eq!(session.store().selected().unwrap().content(), "a");
        assert_eq!(history(&session), vec!["b", "a"]);
        assert!(fakes.clipboard.writes().is_empty());
    }

    #[tokio::test]
    async fn recapture_moves_to_front_when_enabled() {
        let fakes = Fakes::new();
        let mut settings = Settings::default();
        settings.history.move_item_first = true;
        let mut session = HistorySession::new(settings);
        let capture = usecase(&fakes);
        for text in ["a", "b"] {
            fakes.clipboard.set(text);
            capture.execute(&mut session).await.unwrap();
        }

        fakes.clipboard.set("a");
        let outcome = capture.execute(&mut session).await.unwrap();

        assert!(matches!(outcome, CaptureOutcome::Reselected { moved: true, .. }));
        assert_eq!(history(&session), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn recapture_of_newest_entry_is_a_no_op() {
        let fakes = Fakes::new();
        let mut session = HistorySession::new(Settings::default());
        let capture = usecase(&fakes);
        fakes.clipboard.set("a");
        capture.execute(&mut session).await.unwrap();
        let saves = fakes.registry.save_count();

        assert_eq!(capture.execute(&mut session).await.unwrap(), CaptureOutcome::Unchanged);
        assert_eq!(fakes.registry.save_count(), saves);
    }

    #[tokio::test]
    async fn private_mode_skips_reading() {
        let fakes = Fakes::new();
        let mut session = HistorySession::new(Settings::default());
        session.set_private(true);
        fakes.clipboard.set("secret");

        let outcome = usecase(&fakes).execute(&mut session).await.unwrap();

        assert_eq!(outcome, CaptureOutcome::Suspended);
        assert!(session.store().is_empty());
    }

    #[tokio::test]
    async fn strip_text_trims_and_ignores_blank_text() {
        let fakes = Fakes::new();
        let mut settings = Settings::default();
        settings.capture.strip_text = true;
        let mut session = HistorySession::new(settings);
        let capture = usecase(&fakes);

        fakes.clipboard.set("   \n");
        assert_eq!(capture.execute(&mut session).await.unwrap(), CaptureOutcome::NoText);

        fakes.clipboard.set("  padded  ");
        capture.execute(&mut session).await.unwrap();
        assert!(session.store().find_by_content("padded").is_some());
    }

    #[tokio::test]
    async fn read_failure_yields_no_capture() {
        let fakes = Fakes::new();
        *fakes.clipboard.fail_reads.lock().unwrap() = true;
        let mut session = HistorySession::new(Settings::default());

        let outcome = usecase(&fakes).execute(&mut session).await.unwrap();

        assert_eq!(outcome, CaptureOutcome::NoText);
        assert_eq!(fakes.registry.save_count(), 0);
    }

    #[tokio::test]
    async fn notify_on_copy_off_stays_quiet() {
        let fakes = Fakes::new();
        let mut settings = Settings::default();
        settings.notifications.notify_on_copy = false;
        let mut session = HistorySession::new(settings);
        fakes.clipboard.set("quiet");

        usecase(&fakes).execute(&mut session).await.unwrap();

        assert!(fakes.notifier.messages().is_empty());
    }
}
