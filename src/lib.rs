//! ClipRing binary support: bootstrap (tracing, wiring, runtime) and the
//! console front end that drives the engine.

pub mod bootstrap;
pub mod console;
