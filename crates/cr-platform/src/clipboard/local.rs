use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use clipboard_rs::{
    Clipboard, ClipboardContext, ClipboardWatcher as RSClipboardWatcher, ClipboardWatcherContext,
    ContentFormat,
};
use cr_core::ports::{CancelHandle, ClipboardPort, OwnershipSink};
use tokio::task::spawn_blocking;
use tracing::{debug, info};

use super::watcher::OwnershipWatcher;

/// The system clipboard through clipboard-rs.
pub struct LocalClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl LocalClipboard {
    pub fn new() -> Result<Self> {
        let context = new_context()?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }

    fn with_context<T>(&self, f: impl FnOnce(&ClipboardContext) -> Result<T>) -> Result<T> {
        let ctx = self
            .inner
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))?;
        f(&ctx)
    }
}

#[cfg(target_os = "linux")]
fn new_context() -> Result<ClipboardContext> {
    use clipboard_rs::ClipboardContextX11Options;

    ClipboardContext::new_with_options(ClipboardContextX11Options { read_timeout: None })
        .map_err(|e| anyhow!("ClipboardContext::new_with_options failed: {}", e))
}

#[cfg(not(target_os = "linux"))]
fn new_context() -> Result<ClipboardContext> {
    ClipboardContext::new().map_err(|e| anyhow!("ClipboardContext::new failed: {}", e))
}

impl ClipboardPort for LocalClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        self.with_context(|ctx| {
            if !ctx.has(ContentFormat::Text) {
                return Ok(None);
            }
            ctx.get_text()
                .map(Some)
                .map_err(|e| anyhow!("read clipboard text failed: {}", e))
        })
    }

    fn write_text(&self, text: &str) -> Result<()> {
        self.with_context(|ctx| {
            ctx.set_text(text.to_string())
                .map_err(|e| anyhow!("write clipboard text failed: {}", e))
        })
    }

    /// Runs a clipboard-rs watcher on the blocking pool until cancelled.
    fn watch_ownership(&self, sink: OwnershipSink) -> Result<CancelHandle> {
        let mut watcher_ctx = ClipboardWatcherContext::new()
            .map_err(|e| anyhow!("Failed to create watcher context: {}", e))?;

        let shutdown = watcher_ctx
            .add_handler(OwnershipWatcher::new(sink))
            .get_shutdown_channel();

        spawn_blocking(move || {
            info!("start clipboard watch");
            watcher_ctx.start_watch();
            info!("clipboard watch stopped");
        });

        Ok(CancelHandle::new(move || {
            debug!("Stopping clipboard watcher");
            shutdown.stop();
        }))
    }
}
