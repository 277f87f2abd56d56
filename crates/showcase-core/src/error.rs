//! Error types for the Media Showcase

use thiserror::Error;

/// Main error type for showcase operations
#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// Error reported by a key-value store backend
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognised filter name
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

/// Result type alias using ShowcaseError
pub type ShowcaseResult<T> = Result<T, ShowcaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShowcaseError::InvalidFilter("audio".to_string());
        assert_eq!(err.to_string(), "Invalid filter: audio");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ShowcaseError = io_err.into();
        assert!(matches!(err, ShowcaseError::Io(_)));
    }
}
