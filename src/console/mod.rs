//! Line-based console that stands in for a menu and hotkey host.
//!
//! 控制台界面：以文本命令驱动引擎，代替菜单与快捷键宿主。

mod command;
mod render;

use anyhow::Result;
use cr_app::usecases::ClearOutcome;
use cr_app::EngineHandle;
use cr_core::ports::{Notification, NotificationAction};
use cr_core::EntryId;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

pub use command::{CommandParseError, ConsoleCommand};
pub use render::render_view;

/// Whether the console keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console {
    handle: EngineHandle,
    notifications: mpsc::UnboundedReceiver<Notification>,
    last_undo: Option<EntryId>,
}

impl Console {
    pub fn new(
        handle: EngineHandle,
        notifications: mpsc::UnboundedReceiver<Notification>,
    ) -> Self {
        Self {
            handle,
            notifications,
            last_undo: None,
        }
    }

    /// Read commands from stdin until `quit` or end of input.
    pub async fn run(mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        println!("{}", render::HELP);

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("stdin closed");
                        return Ok(());
                    };
                    if self.handle_line(&line).await? == Flow::Quit {
                        return Ok(());
                    }
                }
                Some(notification) = self.notifications.recv() => {
                    self.on_notification(notification);
                }
            }
        }
    }

    async fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match ConsoleCommand::parse(line) {
            Ok(Some(command)) => self.execute(command).await,
            Ok(None) => Ok(Flow::Continue),
            Err(err) => {
                println!("{err}");
                Ok(Flow::Continue)
            }
        }
    }

    fn on_notification(&mut self, notification: Notification) {
        let Some(action) = &notification.action else {
            println!("» {}", notification.message);
            return;
        };
        match action {
            NotificationAction::UndoCapture { entry } => self.last_undo = Some(entry.clone()),
        }
        println!("» {} [{}: `undo`]", notification.message, action.label());
    }

    /// Map a row number from `list` to the entry behind it.
    fn entry_at(&self, number: usize) -> Option<EntryId> {
        let view = self.handle.view();
        number
            .checked_sub(1)
            .and_then(|index| view.rows.get(index))
            .map(|row| row.id.clone())
    }

    pub async fn execute(&mut self, command: ConsoleCommand) -> Result<Flow> {
        match command {
            ConsoleCommand::List => println!("{}", render_view(&self.handle.view())),
            ConsoleCommand::Help => println!("{}", render::HELP),
            ConsoleCommand::Next => self.handle.select_next().await?,
            ConsoleCommand::Previous => self.handle.select_previous().await?,
            ConsoleCommand::Select(n) => match self.entry_at(n) {
                Some(entry) => self.handle.select(entry).await?,
                None => println!("No entry {n}"),
            },
            ConsoleCommand::Favorite(n) => match self.entry_at(n) {
                Some(entry) => self.handle.toggle_favorite(entry).await?,
                None => println!("No entry {n}"),
            },
            ConsoleCommand::Delete(n) => {
                if !self.handle.view().delete_enabled {
                    println!("Deleting entries is disabled");
                } else {
                    match self.entry_at(n) {
                        Some(entry) => self.handle.delete(entry).await?,
                        None => println!("No entry {n}"),
                    }
                }
            }
            ConsoleCommand::Clear { confirmed } => {
                match self.handle.clear_history(confirmed).await? {
                    ClearOutcome::ConfirmationRequired => {
                        println!("Clear all history? Run `clear -y` to confirm")
                    }
                    ClearOutcome::Cleared { removed } => println!("Removed {removed} entries"),
                }
            }
            ConsoleCommand::Undo => match self.last_undo.take() {
                Some(entry) => self.handle.undo_capture(entry).await?,
                None => println!("Nothing to undo"),
            },
            ConsoleCommand::Private(enabled) => self.handle.set_private_mode(enabled).await?,
            ConsoleCommand::Search(query) if query.is_empty() => self.handle.reset_search().await?,
            ConsoleCommand::Search(query) => self.handle.search(query).await?,
            ConsoleCommand::Reload => self.handle.reload_settings().await?,
            ConsoleCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
