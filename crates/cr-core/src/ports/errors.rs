use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data directory is unavailable")]
    DataDirUnavailable,

    #[error("app dirs error: {0}")]
    Other(String),
}
