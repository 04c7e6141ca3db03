use thiserror::Error;

/// Result type alias for garden storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur when saving, loading or exchanging gardens
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Garden with ID {0} not found")]
    NotFound(String),

    #[error("Invalid garden file format: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid share link: {0}")]
    ShareLink(String),
}

impl From<url::ParseError> for StorageError {
    fn from(err: url::ParseError) -> Self {
        StorageError::ShareLink(err.to_string())
    }
}
