//! Dataset error types
//!
//! Errors raised while assembling the fixed table at startup. Any of these
//! aborts the process: there is no degraded mode without a dataset.

use thiserror::Error;

/// Errors that can occur while building a dataset
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// The table has no columns at all
    #[error("Dataset has no columns")]
    NoColumns,

    /// A column was declared with an empty name
    #[error("Column at position {0} has an empty name")]
    EmptyColumnName(usize),

    /// Two columns share the same name
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// A column's length differs from the first column's
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A value does not match the declared column kind
    #[error("Column '{column}' row {row}: expected {expected} value")]
    KindMismatch {
        column: String,
        row: usize,
        expected: &'static str,
    },
}

/// Result type alias for dataset construction
pub type DatasetResult<T> = Result<T, DatasetError>;
