use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One persisted history entry.
///
/// The field is named `contents` so files written by older releases keep
/// loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryRecord {
    pub contents: String,
    #[serde(default)]
    pub favorite: bool,
}

impl RegistryRecord {
    pub fn new(contents: impl Into<String>, favorite: bool) -> Self {
        Self {
            contents: contents.into(),
            favorite,
        }
    }
}

/// A record as found on disk: either a bare string (legacy format) or a
/// structured record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersistedRecord {
    Legacy(String),
    Structured(RegistryRecord),
}

impl PersistedRecord {
    pub fn normalize(self) -> RegistryRecord {
        match self {
            PersistedRecord::Legacy(contents) => RegistryRecord::new(contents, false),
            PersistedRecord::Structured(record) => record,
        }
    }
}

impl From<RegistryRecord> for PersistedRecord {
    fn from(record: RegistryRecord) -> Self {
        PersistedRecord::Structured(record)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryDecodeError {
    #[error("registry document is not an array (found {0})")]
    NotAnArray(&'static str),
}

/// Decode a registry document, dropping elements that are neither a string
/// nor a `{contents, favorite}` object.
pub fn decode_records(
    document: serde_json::Value,
) -> Result<Vec<PersistedRecord>, RegistryDecodeError> {
    let items = match document {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(_) => return Err(RegistryDecodeError::NotAnArray("object")),
        serde_json::Value::String(_) => return Err(RegistryDecodeError::NotAnArray("string")),
        serde_json::Value::Number(_) => return Err(RegistryDecodeError::NotAnArray("number")),
        serde_json::Value::Bool(_) => return Err(RegistryDecodeError::NotAnArray("bool")),
        serde_json::Value::Null => return Err(RegistryDecodeError::NotAnArray("null")),
    };

    let records = items
        .into_iter()
        .enumerate()
        .filter_map(|(_index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(index = _index, error = %_err, "Skipping malformed registry record");
                None
            }
        })
        .collect();
    Ok(records)
}
