use thiserror::Error;

use crate::repository::RepositoryError;

pub mod containers;
pub mod files;
pub mod products;

/// Result type returned by every service operation.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer.
///
/// The two not-found variants carry the exact detail text the API exposes.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Container not found")]
    ContainerNotFound,
    #[error("Product not found")]
    ProductNotFound,
    /// Malformed or missing input fields; maps to a 422 response.
    #[error("{0}")]
    Form(String),
    /// File storage failure in the upload passthrough.
    #[error("file storage error: {0}")]
    Storage(#[from] std::io::Error),
    /// Any other storage failure; maps to a 500 response.
    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ContainerNotFound => ServiceError::ContainerNotFound,
            RepositoryError::ProductNotFound => ServiceError::ProductNotFound,
            other => ServiceError::Repository(other),
        }
    }
}
