use thiserror::Error;

/// Failure reported by a persistence gateway
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// A storage-level uniqueness constraint rejected the write
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// The write referenced a row that does not exist
    #[error("referenced record does not exist: {0}")]
    MissingReference(String),

    /// The store could not be reached or failed unexpectedly
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
