use thiserror::Error;

use crate::repository::RepositoryError;

pub mod products;

/// Result type returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer to transport adapters.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed product does not exist.
    #[error("Product with ID {0} not found")]
    NotFound(i32),
    /// The inbound payload failed structural validation.
    #[error("{0}")]
    Form(String),
    /// The repository failed for a non-domain reason.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ServiceError::NotFound(id),
            other => ServiceError::Repository(other),
        }
    }
}
