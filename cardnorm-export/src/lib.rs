//! cardnorm-export: statement CSV in, normalized CSV out

pub mod error;
pub mod naming;
pub mod pipeline;
pub mod reader;
pub mod writer;

pub use error::{Result, StatementError};
pub use naming::{output_file_name, output_path};
pub use pipeline::{ConvertOptions, Conversion, convert_file, convert_rows, resolve_bank};
pub use reader::{read_rows, read_rows_from_path};
pub use writer::{EXPORT_HEADERS, write_transactions, write_transactions_to_path};
