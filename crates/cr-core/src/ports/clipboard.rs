//! Clipboard port - narrow access to the single system copy buffer.

use anyhow::Result;
use tokio::sync::mpsc;

use super::scheduler::CancelHandle;

/// Which selection buffer changed owner.
///
/// Only [`SelectionKind::Clipboard`] triggers a capture; the others are
/// reported by some platforms and ignored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Clipboard,
    Primary,
    Secondary,
}

/// Where ownership-change notifications are delivered.
pub type OwnershipSink = mpsc::UnboundedSender<SelectionKind>;

/// System clipboard capability.
///
/// 系统剪贴板能力端口。
///
/// # Behavior / 行为
/// - Reads and writes are fire-and-forget; callers never cache clipboard state.
/// - `watch_ownership` returns an error when the platform cannot report owner
///   changes. Callers then fall back to polling.
///
/// - 读写不缓存状态，每次触发都重新读取。
/// - 平台不支持所有权通知时 `watch_ownership` 返回错误，调用方改用轮询。
pub trait ClipboardPort: Send + Sync {
    /// Current clipboard text, `None` when the clipboard holds no text.
    fn read_text(&self) -> Result<Option<String>>;

    fn write_text(&self, text: &str) -> Result<()>;

    /// Start forwarding owner-change notifications to `sink` until the
    /// returned handle is cancelled.
    fn watch_ownership(&self, sink: OwnershipSink) -> Result<CancelHandle>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_port_is_object_safe() {
        fn assert_object_safe(_port: Option<&dyn ClipboardPort>) {}
        assert_object_safe(None);
    }
}
