//! # cr-core
//!
//! Core domain models and history rules for ClipRing.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the ordered entry store, selection tracking, search visibility, previews,
//! the settings snapshot and the ports the engine talks to.

pub mod app_dirs;
pub mod history;
pub mod ids;
pub mod ports;
pub mod registry;
pub mod settings;

// Re-export commonly used types at the crate root
pub use history::{
    Direction, Entry, HistoryError, HistoryStore, HistoryView, NavigationStep, SearchFilter,
    SelectionState, SelectionTracker,
};
pub use ids::EntryId;
pub use registry::{PersistedRecord, RegistryRecord};
pub use settings::model::Settings;
