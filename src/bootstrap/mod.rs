pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::load_settings;
pub use run::run_app;
pub use wiring::{wire_engine, WiredEngine, WiringError};
