//! End-to-end conversion of one statement file.
//!
//! Statement-level failures are raised here, in this order: unsupported bank,
//! no rows at all, no valid transactions. Everything row-level has already
//! been absorbed by the scan.

use cardnorm_core::{BankVariant, Transaction};
use cardnorm_ingest::{ScanReport, StatementNormalizer};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Result, StatementError};
use crate::naming::output_path;
use crate::reader::read_rows_from_path;
use crate::writer::write_transactions_to_path;

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Skip file-name detection and use this bank.
    pub bank: Option<BankVariant>,
    /// Exact output path; wins over `out_dir`.
    pub output: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    /// When false the transactions are returned but nothing is written.
    pub write: bool,
}

#[derive(Debug, Clone)]
pub struct Conversion {
    pub bank: BankVariant,
    pub transactions: Vec<Transaction>,
    pub report: ScanReport,
    pub output: Option<PathBuf>,
}

/// Pick the bank for `input`: the override if given, else the file name.
pub fn resolve_bank(input: &Path, bank: Option<BankVariant>) -> Result<BankVariant> {
    if let Some(bank) = bank {
        return Ok(bank);
    }

    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    BankVariant::detect_from_file_name(&file_name)
        .ok_or(StatementError::UnsupportedBank { file_name })
}

/// Normalize already-tokenized rows.
pub fn convert_rows(
    rows: &[Vec<String>],
    bank: BankVariant,
    normalizer: &StatementNormalizer,
) -> Result<Conversion> {
    if rows.iter().all(|row| row.iter().all(|cell| cell.trim().is_empty())) {
        return Err(StatementError::NoRows);
    }

    let (transactions, report) = normalizer.normalize_with_report(rows, bank);
    if transactions.is_empty() {
        return Err(StatementError::NoTransactions { rows: report.rows });
    }

    Ok(Conversion {
        bank,
        transactions,
        report,
        output: None,
    })
}

pub fn convert_file(
    input: &Path,
    options: &ConvertOptions,
    normalizer: &StatementNormalizer,
) -> Result<Conversion> {
    let bank = resolve_bank(input, options.bank)?;
    info!("Detected bank: {}", bank);

    let rows = read_rows_from_path(input)?;
    let mut conversion = convert_rows(&rows, bank, normalizer)?;
    info!(
        "Parsed {} transactions from {}",
        conversion.transactions.len(),
        input.display()
    );

    if options.write {
        let out = options
            .output
            .clone()
            .unwrap_or_else(|| output_path(input, options.out_dir.as_deref()));
        write_transactions_to_path(&out, &conversion.transactions)?;
        info!("Wrote {}", out.display());
        conversion.output = Some(out);
    }

    Ok(conversion)
}
