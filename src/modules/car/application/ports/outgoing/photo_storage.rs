use async_trait::async_trait;
use std::path::Path;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PhotoStorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Photo URL is not managed by this storage: {0}")]
    ForeignUrl(String),
}

/// Where car photos live once accepted.
#[async_trait]
pub trait PhotoStorage: Send + Sync {
    /// Copies the file at `source` into storage and returns its public URL.
    async fn store(&self, source: &Path, extension: &str) -> Result<String, PhotoStorageError>;

    /// Removes a previously stored photo. Removing a file that is already
    /// gone succeeds.
    async fn remove(&self, url: &str) -> Result<(), PhotoStorageError>;
}
