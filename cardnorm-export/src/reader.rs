//! Tokenize a statement CSV into raw rows.
//!
//! Statements carry banners, cardholder lines and repeated headers, so there
//! is no header row and rows may have any number of cells. Bytes that are
//! not UTF-8 (Latin-1 exports) become U+FFFD instead of failing the file.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, StatementError};

pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.byte_records() {
        let record = result?;
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }

    debug!("Parsed {} rows from CSV", rows.len());
    Ok(rows)
}

pub fn read_rows_from_path(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| StatementError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows(file)
}
