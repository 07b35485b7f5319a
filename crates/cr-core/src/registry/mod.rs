//! Durable projection of the history store.

mod record;

pub use record::{decode_records, PersistedRecord, RegistryDecodeError, RegistryRecord};
