use thiserror::Error;

/// Result type returned by repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No product matches the requested identifier.
    #[error("Product with ID {0} not found")]
    NotFound(i32),
    /// The store mutex was poisoned by a panicking holder.
    #[error("catalog store lock poisoned")]
    Poisoned,
}
