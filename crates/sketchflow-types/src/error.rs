use thiserror::Error;

/// Errors from the local file-backed stores (workflows, uploads).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid name: '{0}'")]
    InvalidName(String),

    #[error("{0}")]
    Io(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e.to_string())
    }
}
