//! ClipRing application layer
//!
//! Use cases over a [`HistorySession`] and the single-task engine runtime
//! that multiplexes capture triggers, commands and timers.

pub mod app_paths;
pub mod deps;
pub mod runtime;
pub mod session;
pub mod usecases;

pub use app_paths::AppPaths;
pub use deps::EngineDeps;
pub use runtime::{EngineCommand, EngineError, EngineHandle, EngineRuntime};
pub use session::HistorySession;
