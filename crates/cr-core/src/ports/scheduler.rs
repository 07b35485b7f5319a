use std::fmt;
use std::time::Duration;

/// Work that fires after a delay and is handed back to the engine runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Complete a navigation started under move-item-first.
    /// Only the pending generation is honoured.
    DelayedSelection { generation: u64 },
}

/// Cancels an outstanding task, watcher or ticker.
///
/// 取消句柄：重复取消或在任务触发后取消均为空操作。
pub struct CancelHandle {
    abort: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl CancelHandle {
    pub fn new(abort: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            abort: Some(Box::new(abort)),
        }
    }

    /// A handle with nothing behind it.
    pub fn noop() -> Self {
        Self { abort: None }
    }

    pub fn cancel(&mut self) {
        if let Some(abort) = self.abort.take() {
            abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_none()
    }
}

impl fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// One-shot timers.
///
/// # Behavior / 行为
/// - The fired task is delivered to the runtime through the channel the
///   implementation was built with, never executed in place.
/// - Cancelling the returned handle before the delay elapses suppresses the
///   delivery. Cancelling afterwards does nothing.
///
/// - 任务到期后通过通道交回运行时，而非就地执行。
/// - 到期前取消则不会投递；到期后取消无效果。
pub trait SchedulerPort: Send + Sync {
    fn schedule(&self, delay: Duration, task: ScheduledTask) -> CancelHandle;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn cancel_runs_abort_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut handle = CancelHandle::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        handle.cancel();
        handle.cancel();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(handle.is_cancelled());
    }

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CancelHandle>();
    }

    #[test]
    fn noop_handle_is_already_cancelled() {
        let mut handle = CancelHandle::noop();
        handle.cancel();
        assert!(handle.is_cancelled());
    }
}
