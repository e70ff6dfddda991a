//! Statement-level failures. Row-level problems never reach this type; they
//! only shrink the transaction list.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatementError {
    #[error("Unsupported bank format: {file_name} (file name must mention hdfc, icici, idfc or axis)")]
    UnsupportedBank { file_name: String },

    #[error("No data found in the CSV file")]
    NoRows,

    #[error("No valid transaction data found in the file ({rows} rows scanned)")]
    NoTransactions { rows: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StatementError>;
