use cr_core::ports::{Notification, NotificationPort};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Delivers notifications to the log and, optionally, to a host feed.
///
/// 通知输出到日志，并可转发给宿主（例如控制台界面）以便响应操作按钮。
pub struct LogNotifier {
    feed: Option<mpsc::UnboundedSender<Notification>>,
}

impl LogNotifier {
    pub fn new() -> Self {
        Self { feed: None }
    }

    /// Also forward every notification to the returned receiver.
    pub fn with_feed() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { feed: Some(tx) }, rx)
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationPort for LogNotifier {
    fn notify(&self, notification: Notification) {
        match &notification.action {
            Some(action) => info!(
                message = %notification.message,
                action = action.label(),
                "Notification"
            ),
            None => info!(message = %notification.message, "Notification"),
        }

        if let Some(feed) = &self.feed {
            if feed.send(notification).is_err() {
                debug!("Notification feed closed");
            }
        }
    }
}
