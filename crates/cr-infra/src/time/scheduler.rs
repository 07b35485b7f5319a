use cr_core::ports::{CancelHandle, ScheduledTask, SchedulerPort};
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};
use tracing::debug;

/// One-shot timers on the tokio runtime.
///
/// Each task sleeps in its own spawned task and is then sent to the engine
/// runtime. Cancelling aborts the sleeping task.
///
/// Must be used from inside a tokio runtime.
pub struct TokioScheduler {
    fired: mpsc::UnboundedSender<ScheduledTask>,
}

impl TokioScheduler {
    pub fn new(fired: mpsc::UnboundedSender<ScheduledTask>) -> Self {
        Self { fired }
    }

    /// A scheduler together with the receiver its tasks fire into.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ScheduledTask>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl SchedulerPort for TokioScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) -> CancelHandle {
        let fired = self.fired.clone();
        let join = tokio::spawn(async move {
            sleep(delay).await;
            if fired.send(task).is_err() {
                debug!(?task, "Scheduled task fired after runtime shut down");
            }
        });

        debug!(?task, delay_ms = delay.as_millis() as u64, "task scheduled");
        let abort = join.abort_handle();
        CancelHandle::new(move || abort.abort())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    const TASK: ScheduledTask = ScheduledTask::DelayedSelection { generation: 1 };

    #[tokio::test]
    async fn task_fires_after_delay() {
        tokio::time::pause();
        let (scheduler, mut rx) = TokioScheduler::channel();

        let _handle = scheduler.schedule(Duration::from_millis(750), TASK);
        tokio::task::yield_now().await;
        advance(Duration::from_millis(749)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        advance(Duration::from_millis(1)).await;
        assert_eq!(rx.recv().await, Some(TASK));
    }

    #[tokio::test]
    async fn cancelled_task_never_fires() {
        tokio::time::pause();
        let (scheduler, mut rx) = TokioScheduler::channel();

        let mut handle = scheduler.schedule(Duration::from_millis(750), TASK);
        tokio::task::yield_now().await;
        handle.cancel();
        advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn cancel_after_fire_is_a_no_op() {
        tokio::time::pause();
        let (scheduler, mut rx) = TokioScheduler::channel();

        let mut handle = scheduler.schedule(Duration::from_millis(10), TASK);
        assert_eq!(rx.recv().await, Some(TASK));

        handle.cancel();
        handle.cancel();
        assert!(handle.is_cancelled());
    }
}
