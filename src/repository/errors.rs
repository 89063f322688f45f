use thiserror::Error;

/// Result type returned by every storage operation.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors originating at the storage seam.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("container not found")]
    ContainerNotFound,
    #[error("product not found")]
    ProductNotFound,
    #[error("store lock poisoned")]
    Lock,
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage encoding error: {0}")]
    Serde(#[from] serde_json::Error),
}
