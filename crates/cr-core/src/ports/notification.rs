use crate::ids::EntryId;

/// Action attached to a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationAction {
    /// Offered right after a capture; undoes it if the entry is still newest.
    UndoCapture { entry: EntryId },
}

impl NotificationAction {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationAction::UndoCapture { .. } => "Cancel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub action: Option<NotificationAction>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action: None,
        }
    }

    pub fn with_action(mut self, action: NotificationAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Outbound user notifications. Rendering is up to the host.
pub trait NotificationPort: Send + Sync {
    fn notify(&self, notification: Notification);
}
