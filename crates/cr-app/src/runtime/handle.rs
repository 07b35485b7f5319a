use anyhow::Result;
use cr_core::{EntryId, HistoryView, Settings};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};

use super::command::EngineCommand;
use crate::usecases::{ClearOutcome, SettingsApplied};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("engine runtime has stopped")]
    Stopped,

    #[error("engine runtime dropped the reply to `{0}`")]
    ReplyDropped(&'static str),
}

/// Cloneable front door to a running engine.
///
/// 运行中引擎的句柄：发送命令并订阅视图。
#[derive(Clone)]
pub struct EngineHandle {
    commands: mpsc::Sender<EngineCommand>,
    view: watch::Receiver<HistoryView>,
}

impl EngineHandle {
    pub(crate) fn new(
        commands: mpsc::Sender<EngineCommand>,
        view: watch::Receiver<HistoryView>,
    ) -> Self {
        Self { commands, view }
    }

    pub async fn send(&self, command: EngineCommand) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| EngineError::Stopped.into())
    }

    /// Latest published view.
    pub fn view(&self) -> HistoryView {
        self.view.borrow().clone()
    }

    /// A receiver that is notified on every republish.
    pub fn subscribe(&self) -> watch::Receiver<HistoryView> {
        self.view.clone()
    }

    pub async fn refresh(&self) -> Result<()> {
        self.send(EngineCommand::Refresh).await
    }

    pub async fn select(&self, entry: EntryId) -> Result<()> {
        self.send(EngineCommand::Select(entry)).await
    }

    pub async fn select_next(&self) -> Result<()> {
        self.send(EngineCommand::SelectNext).await
    }

    pub async fn select_previous(&self) -> Result<()> {
        self.send(EngineCommand::SelectPrevious).await
    }

    pub async fn toggle_favorite(&self, entry: EntryId) -> Result<()> {
        self.send(EngineCommand::ToggleFavorite(entry)).await
    }

    pub async fn delete(&self, entry: EntryId) -> Result<()> {
        self.send(EngineCommand::Delete(entry)).await
    }

    pub async fn clear_history(&self, confirmed: bool) -> Result<ClearOutcome> {
        let (reply, rx) = oneshot::channel();
        self.send(EngineCommand::ClearHistory {
            confirmed,
            reply: Some(reply),
        })
        .await?;
        rx.await
            .map_err(|_| EngineError::ReplyDropped("clear_history").into())
    }

    pub async fn undo_capture(&self, entry: EntryId) -> Result<()> {
        self.send(EngineCommand::UndoCapture(entry)).await
    }

    pub async fn set_private_mode(&self, enabled: bool) -> Result<()> {
        self.send(EngineCommand::SetPrivateMode(enabled)).await
    }

    pub async fn search(&self, query: impl Into<String>) -> Result<()> {
        self.send(EngineCommand::Search(query.into())).await
    }

    pub async fn reset_search(&self) -> Result<()> {
        self.send(EngineCommand::ResetSearch).await
    }

    pub async fn reload_settings(&self) -> Result<()> {
        self.send(EngineCommand::ReloadSettings).await
    }

    pub async fn update_settings(&self, settings: Settings) -> Result<SettingsApplied> {
        let (reply, rx) = oneshot::channel();
        self.send(EngineCommand::UpdateSettings { settings, reply }).await?;
        rx.await
            .map_err(|_| EngineError::ReplyDropped("update_settings"))?
    }

    pub async fn shutdown(&self) -> Result<()> {
        self.send(EngineCommand::Shutdown).await
    }
}
