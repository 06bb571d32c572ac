//! Error types for list and record utilities.

use thiserror::Error;

/// Errors that can occur while building records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A column name is not part of the record schema.
    #[error("column '{column}' is not defined")]
    UnknownColumn { column: String },

    /// A record schema names the same column twice.
    #[error("column '{column}' is defined more than once")]
    DuplicateColumn { column: String },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
