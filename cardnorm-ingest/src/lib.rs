//! cardnorm-ingest: bank-specific row parsers and the statement scan that feeds them.

pub mod context;
pub mod error;
pub mod normalizer;
pub mod parsers;

pub use context::ScanContext;
pub use error::RowError;
pub use normalizer::{DEFAULT_CARDHOLDERS, RowKind, ScanReport, StatementNormalizer};
pub use parsers::{RowParser, parse_row};
