//! Serialize normalized transactions back to CSV.

use cardnorm_core::Transaction;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, StatementError};

pub const EXPORT_HEADERS: [&str; 8] = [
    "Date",
    "Transaction Description",
    "Debit",
    "Credit",
    "Currency",
    "CardName",
    "Transaction",
    "Location",
];

#[derive(Debug, Serialize)]
struct ExportRecord<'a> {
    date: String,
    description: &'a str,
    debit: String,
    credit: String,
    currency: &'static str,
    card_name: &'a str,
    transaction_type: &'static str,
    location: &'a str,
}

impl<'a> From<&'a Transaction> for ExportRecord<'a> {
    fn from(t: &'a Transaction) -> Self {
        Self {
            date: t.date.format(cardnorm_core::date::CANONICAL_FORMAT).to_string(),
            description: &t.description,
            debit: format_amount(t.debit),
            credit: format_amount(t.credit),
            currency: t.currency.as_str(),
            card_name: &t.card_name,
            transaction_type: t.transaction_type.as_str(),
            location: &t.location,
        }
    }
}

/// Shortest form that round-trips: `0`, `1200.5`, `42.1`.
fn format_amount(value: f64) -> String {
    value.to_string()
}

/// Write the header row followed by one row per transaction.
pub fn write_transactions<W: Write>(writer: W, txns: &[Transaction]) -> Result<()> {
    let mut wtr = records_writer(writer, txns)?;
    wtr.flush().map_err(|e| StatementError::Csv(e.into()))?;
    Ok(())
}

pub fn write_transactions_to_path(path: impl AsRef<Path>, txns: &[Transaction]) -> Result<()> {
    let path = path.as_ref();
    let io_error = |source| StatementError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut wtr = records_writer(file, txns)?;
    wtr.flush().map_err(io_error)?;
    Ok(())
}

fn records_writer<W: Write>(writer: W, txns: &[Transaction]) -> Result<csv::Writer<W>> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(EXPORT_HEADERS)?;
    for t in txns {
        wtr.serialize(ExportRecord::from(t))?;
    }
    Ok(wtr)
}
