//! Reasons a statement row is dropped instead of becoming a transaction.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("missing date column {column}")]
    MissingDate { column: usize },

    #[error("unrecognized date {raw:?} in column {column}")]
    InvalidDate { column: usize, raw: String },
}
