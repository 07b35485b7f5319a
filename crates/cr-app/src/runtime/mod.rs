//! Engine runtime: one task owns the session and serialises every input.

mod command;
mod handle;
#[allow(clippy::module_inception)]
mod runtime;
mod usecases;

pub use command::EngineCommand;
pub use handle::{EngineError, EngineHandle};
pub use runtime::EngineRuntime;
pub use usecases::UseCases;
