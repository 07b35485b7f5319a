use clipboard_rs::ClipboardHandler;
use cr_core::ports::{OwnershipSink, SelectionKind};
use tracing::{debug, trace};

/// Forwards clipboard owner changes from the platform watcher thread to the
/// engine runtime.
///
/// clipboard-rs only watches the regular clipboard, so every change is
/// reported as [`SelectionKind::Clipboard`].
pub struct OwnershipWatcher {
    sink: OwnershipSink,
}

impl OwnershipWatcher {
    pub fn new(sink: OwnershipSink) -> Self {
        Self { sink }
    }
}

impl ClipboardHandler for OwnershipWatcher {
    fn on_clipboard_change(&mut self) {
        trace!("Clipboard owner changed");
        if self.sink.send(SelectionKind::Clipboard).is_err() {
            debug!("Engine runtime gone, dropping owner change");
        }
    }
}
