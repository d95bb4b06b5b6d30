use thiserror::Error;

/// Unified result type for the grid studio crate.
pub type Result<T> = std::result::Result<T, GridError>;

/// Recoverable failures reported to the caller.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("configuration blob is not valid: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("no saved configuration under `{0}`")]
    NoSavedConfiguration(String),
    #[error("template `{0}` not found")]
    UnknownTemplate(String),
    #[error("configuration store error: {0}")]
    Storage(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
