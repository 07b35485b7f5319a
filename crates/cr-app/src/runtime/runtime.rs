use std::time::Duration;

use cr_core::ports::{CancelHandle, OwnershipSink, ScheduledTask, SelectionKind};
use cr_core::settings::ListenerMode;
use cr_core::{Direction, HistoryView, Settings};
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use super::command::EngineCommand;
use super::handle::EngineHandle;
use super::usecases::UseCases;
use crate::deps::EngineDeps;
use crate::session::HistorySession;
use crate::usecases::ClearOutcome;

const COMMAND_BUFFER: usize = 64;

/// How capture triggers currently arrive. Never more than one at a time.
enum CaptureSource {
    Idle,
    Ownership(CancelHandle),
    Polling(Interval),
}

/// Single-task event loop owning the [`HistorySession`].
///
/// 引擎运行时：单任务持有会话，串行处理命令、所有权通知、定时任务与轮询。
///
/// Inputs are multiplexed with `tokio::select!`. After every handled input a
/// fresh [`HistoryView`] is published on the watch channel.
pub struct EngineRuntime {
    deps: EngineDeps,
    session: HistorySession,
    command_rx: mpsc::Receiver<EngineCommand>,
    task_rx: mpsc::UnboundedReceiver<ScheduledTask>,
    ownership_tx: OwnershipSink,
    ownership_rx: mpsc::UnboundedReceiver<SelectionKind>,
    view_tx: watch::Sender<HistoryView>,
    capture: CaptureSource,
    shutting_down: bool,
}

impl EngineRuntime {
    /// `task_rx` receives the tasks fired by the scheduler in `deps`.
    pub fn new(
        deps: EngineDeps,
        settings: Settings,
        task_rx: mpsc::UnboundedReceiver<ScheduledTask>,
    ) -> (Self, EngineHandle) {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (ownership_tx, ownership_rx) = mpsc::unbounded_channel();
        let session = HistorySession::new(settings);
        let (view_tx, view_rx) = watch::channel(session.view());

        let runtime = Self {
            deps,
            session,
            command_rx,
            task_rx,
            ownership_tx,
            ownership_rx,
            view_tx,
            capture: CaptureSource::Idle,
            shutting_down: false,
        };
        (runtime, EngineHandle::new(command_tx, view_rx))
    }

    pub async fn run(mut self) {
        self.startup().await;

        while !self.shutting_down {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(command) => self.handle_command(command).await,
                    None => {
                        info!("All engine handles dropped, shutting down");
                        self.shutting_down = true;
                    }
                },
                Some(kind) = self.ownership_rx.recv() => {
                    self.handle_ownership_change(kind).await;
                }
                Some(task) = self.task_rx.recv() => {
                    self.handle_task(task);
                }
                _ = next_tick(&mut self.capture) => {
                    self.capture_now().await;
                }
            }
            self.publish();
        }

        self.teardown();
    }

    async fn startup(&mut self) {
        if let Err(err) = UseCases::new(&self.deps)
            .load_history()
            .execute(&mut self.session)
            .await
        {
            error!(error = %err, "Failed to load history");
        }
        self.start_capture();
        self.publish();
        info!("Engine runtime started");
    }

    fn teardown(&mut self) {
        self.session.cancel_pending();
        self.stop_capture();
        info!("Engine runtime stopped");
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.session.view());
    }

    fn start_capture(&mut self) {
        let capture = self.session.settings().capture.clone();
        self.capture = match capture.listener {
            ListenerMode::Auto => match self.deps.clipboard.watch_ownership(self.ownership_tx.clone()) {
                Ok(handle) => {
                    info!("Capturing on clipboard ownership changes");
                    CaptureSource::Ownership(handle)
                }
                Err(err) => {
                    warn!(error = %err, "Ownership tracking unavailable, falling back to polling");
                    polling(capture.poll_interval())
                }
            },
            ListenerMode::Polling => polling(capture.poll_interval()),
        };
    }

    fn stop_capture(&mut self) {
        match std::mem::replace(&mut self.capture, CaptureSource::Idle) {
            CaptureSource::Ownership(mut handle) => {
                handle.cancel();
                debug!("Ownership listener stopped");
            }
            CaptureSource::Polling(_) => debug!("Polling stopped"),
            CaptureSource::Idle => {}
        }
    }

    async fn capture_now(&mut self) {
        if let Err(err) = UseCases::new(&self.deps)
            .capture_clipboard()
            .execute(&mut self.session)
            .await
        {
            error!(error = %err, "Clipboard capture failed");
        }
    }

    async fn handle_ownership_change(&mut self, kind: SelectionKind) {
        if kind != SelectionKind::Clipboard {
            return;
        }
        if !matches!(self.capture, CaptureSource::Ownership(_)) {
            debug!("Ownership change after listener teardown ignored");
            return;
        }
        self.capture_now().await;
    }

    fn handle_task(&mut self, task: ScheduledTask) {
        match task {
            ScheduledTask::DelayedSelection { generation } => {
                if let Err(err) = UseCases::new(&self.deps)
                    .complete_delayed_selection()
                    .execute(&mut self.session, generation)
                {
                    error!(error = %err, "Delayed selection failed");
                }
            }
        }
    }

    async fn handle_command(&mut self, command: EngineCommand) {
        let usecases = UseCases::new(&self.deps);
        let session = &mut self.session;

        let result = match command {
            EngineCommand::Refresh => {
                self.capture_now().await;
                Ok(())
            }
            EngineCommand::Select(entry) => usecases.select_entry().execute(session, &entry).map(drop),
            EngineCommand::SelectNext => usecases
                .navigate_history()
                .execute(session, Direction::Next)
                .map(drop),
            EngineCommand::SelectPrevious => usecases
                .navigate_history()
                .execute(session, Direction::Previous)
                .map(drop),
            EngineCommand::ToggleFavorite(entry) => usecases
                .toggle_favorite()
                .execute(session, &entry)
                .await
                .map(drop),
            EngineCommand::Delete(entry) => usecases
                .delete_entry()
                .execute(session, &entry)
                .await
                .map(drop),
            EngineCommand::ClearHistory { confirmed, reply } => {
                match usecases.clear_history().execute(session, confirmed).await {
                    Ok(outcome) => {
                        if let Some(reply) = reply {
                            let _ = reply.send(outcome);
                        } else if outcome == ClearOutcome::ConfirmationRequired {
                            debug!("Unconfirmed clear-all dropped");
                        }
                        Ok(())
                    }
                    Err(err) => Err(err),
                }
            }
            EngineCommand::UndoCapture(entry) => usecases
                .cancel_capture()
                .execute(session, &entry)
                .await
                .map(drop),
            EngineCommand::SetPrivateMode(enabled) => usecases
                .set_private_mode()
                .execute(session, enabled)
                .map(drop),
            EngineCommand::Search(query) => {
                usecases.search_history().execute(session, &query);
                Ok(())
            }
            EngineCommand::ResetSearch => {
                usecases.search_history().reset(session);
                Ok(())
            }
            EngineCommand::ReloadSettings => {
                match usecases.reload_settings().execute(session).await {
                    Ok(applied) => {
                        if applied.capture_changed {
                            self.restart_capture();
                        }
                        Ok(())
                    }
                    Err(err) => Err(err),
                }
            }
            EngineCommand::UpdateSettings { settings, reply } => {
                let result = usecases.update_settings().execute(session, settings).await;
                if let Ok(applied) = &result {
                    if applied.capture_changed {
                        self.restart_capture();
                    }
                }
                let _ = reply.send(result);
                Ok(())
            }
            EngineCommand::Shutdown => {
                info!("Engine runtime shutting down");
                self.shutting_down = true;
                Ok(())
            }
        };

        if let Err(err) = result {
            error!(error = %err, "Engine command failed");
        }
    }

    fn restart_capture(&mut self) {
        info!("Capture settings changed, rebuilding listener");
        self.stop_capture();
        self.start_capture();
    }
}

fn polling(period: Duration) -> CaptureSource {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(interval_ms = period.as_millis() as u64, "Capturing by polling");
    CaptureSource::Polling(interval)
}

/// Resolves on the next polling tick; pends forever for other sources.
async fn next_tick(capture: &mut CaptureSource) {
    match capture {
        CaptureSource::Polling(interval) => {
            interval.tick().await;
        }
        _ => std::future::pending::<()>().await,
    }
}
