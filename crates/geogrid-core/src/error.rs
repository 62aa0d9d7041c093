//! Error types for geogrid-core

use thiserror::Error;

use crate::ids::{ColumnId, RowId};

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in geogrid-core
#[derive(Debug, Error)]
pub enum Error {
    /// No row with this id
    #[error("Row not found: {0}")]
    RowNotFound(RowId),

    /// No column with this id
    #[error("Column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// The row exists but holds no cell for the column
    #[error("No cell at row {row}, column {column}")]
    CellNotFound { row: RowId, column: ColumnId },

    /// Every row and column id has been handed out
    #[error("No row or column ids left")]
    IdSpaceExhausted,

    /// Unknown column type token
    #[error("Unknown column type: {0}")]
    UnknownColumnType(String),

    /// Snapshot references are inconsistent
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Snapshot (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    pub(crate) fn snapshot<S: Into<String>>(msg: S) -> Self {
        Error::InvalidSnapshot(msg.into())
    }
}
