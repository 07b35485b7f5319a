use std::sync::Arc;

use anyhow::Result;
use cr_core::history::preview::truncate;
use cr_core::ports::{ClipboardPort, Notification, NotificationPort, ScheduledTask, SchedulerPort};
use cr_core::{Direction, NavigationStep};
use tracing::debug;

use super::select_and_propagate;
use crate::session::HistorySession;

/// Keyboard-style cycling through the display order.
///
/// 在显示顺序中循环切换选中条目。
///
/// # Behavior / 行为
/// - Any pending delayed selection is cancelled first.
/// - With nothing selected the request is ignored.
/// - A position notification `"i / n: label"` is sent for every step.
/// - With move-item-first on, the target is marked now and written to the
///   clipboard after `0.75 × interval_ms`; otherwise it is written at once.
///
/// - 先取消尚未触发的延迟选中。
/// - 没有选中条目时忽略。
/// - 每一步都发送位置通知。
/// - 开启置顶时立即标记，延迟写入剪贴板；否则立即写入。
pub struct NavigateHistory {
    clipboard: Arc<dyn ClipboardPort>,
    notifier: Arc<dyn NotificationPort>,
    scheduler: Arc<dyn SchedulerPort>,
}

impl NavigateHistory {
    pub fn new(
        clipboard: Arc<dyn ClipboardPort>,
        notifier: Arc<dyn NotificationPort>,
        scheduler: Arc<dyn SchedulerPort>,
    ) -> Self {
        Self {
            clipboard,
            notifier,
            scheduler,
        }
    }

    #[tracing::instrument(name = "usecase.navigate_history.execute", skip(self, session))]
    pub fn execute(
        &self,
        session: &mut HistorySession,
        direction: Direction,
    ) -> Result<Option<NavigationStep>> {
        session.cancel_pending();

        let Some(step) = session.selection().step(direction) else {
            debug!("Nothing selected, navigation ignored");
            return Ok(None);
        };

        let label = session
            .store()
            .get(&step.target)
            .map(|entry| truncate(entry.content(), session.settings().display.preview_length))
            .unwrap_or_default();
        self.notifier.notify(Notification::new(format!(
            "{} / {}: {}",
            step.position, step.total, label
        )));

        if session.settings().history.move_item_first {
            session.selection().select(&step.target)?;
            let generation = session.next_generation();
            let delay = session.settings().capture.delayed_selection_delay();
            let handle = self
                .scheduler
                .schedule(delay, ScheduledTask::DelayedSelection { generation });
            session.set_pending(generation, step.target.clone(), handle);
            debug!(generation, delay_ms = delay.as_millis() as u64, "Delayed selection scheduled");
        } else {
            select_and_propagate(self.clipboard.as_ref(), session, &step.target)?;
        }

        Ok(Some(step))
    }
}
