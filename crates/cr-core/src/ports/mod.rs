//! Port interfaces for the application layer
//!
//! Ports define the contract between the history engine (use cases and the
//! runtime) and the outside world: the system clipboard, the persisted
//! registry, notifications, settings storage and timers. Infrastructure and
//! platform crates implement them; tests substitute fakes.

pub mod app_dirs;
pub mod clipboard;
pub mod errors;
pub mod notification;
pub mod registry;
pub mod scheduler;
pub mod settings;

pub use app_dirs::AppDirsPort;
pub use clipboard::{ClipboardPort, OwnershipSink, SelectionKind};
pub use errors::AppDirsError;
pub use notification::{Notification, NotificationAction, NotificationPort};
pub use registry::RegistryPort;
pub use scheduler::{CancelHandle, ScheduledTask, SchedulerPort};
pub use settings::{SettingsMigrationPort, SettingsPort};
