//! Platform adapters for ClipRing: the system clipboard and its owner-change
//! watcher, notification delivery and per-user directories.

pub mod app_dirs;
pub mod clipboard;
pub mod notification;

pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::LocalClipboard;
pub use notification::LogNotifier;
