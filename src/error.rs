use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuickboardError>;

#[derive(Debug, Error)]
pub enum QuickboardError {
    #[cfg(feature = "http-source")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid priority value: {0} (expected 0-4)")]
    InvalidPriority(u8),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("{0}")]
    Other(String),
}
