//! Bank-specific row parsers.
//!
//! Every issuer lays out its rows differently, but all of them end up in the
//! same [`Transaction`]. Amounts never fail a row: anything unreadable is 0.

pub mod axis;
pub mod hdfc;
pub mod icici;
pub mod idfc;

use cardnorm_core::{
    BankVariant, Currency, DateNormalizer, NOT_AVAILABLE, Transaction, extract_location,
};
use chrono::NaiveDate;

use crate::context::ScanContext;
use crate::error::RowError;

pub use axis::AxisParser;
pub use hdfc::HdfcParser;
pub use icici::IciciParser;
pub use idfc::IdfcParser;

pub trait RowParser {
    /// Turn one classified transaction row into a normalized transaction.
    fn parse(
        &self,
        row: &[String],
        ctx: &ScanContext,
        dates: &DateNormalizer,
    ) -> Result<Transaction, RowError>;
}

/// Dispatch a row to the parser for `bank`.
pub fn parse_row(
    row: &[String],
    bank: BankVariant,
    ctx: &ScanContext,
    dates: &DateNormalizer,
) -> Result<Transaction, RowError> {
    match bank {
        BankVariant::Hdfc => HdfcParser.parse(row, ctx, dates),
        BankVariant::Icici => IciciParser.parse(row, ctx, dates),
        BankVariant::Idfc => IdfcParser.parse(row, ctx, dates),
        BankVariant::Axis => AxisParser.parse(row, ctx, dates),
    }
}

/// Non-empty cell at `idx`.
pub(crate) fn cell(row: &[String], idx: usize) -> Option<&str> {
    row.get(idx).map(String::as_str).filter(|s| !s.is_empty())
}

pub(crate) fn description_at(row: &[String], idx: usize) -> String {
    cell(row, idx).unwrap_or(NOT_AVAILABLE).to_string()
}

pub(crate) fn date_at(
    row: &[String],
    idx: usize,
    dates: &DateNormalizer,
) -> Result<NaiveDate, RowError> {
    let raw = cell(row, idx).ok_or(RowError::MissingDate { column: idx })?;
    dates.parse(raw).ok_or_else(|| RowError::InvalidDate {
        column: idx,
        raw: raw.to_string(),
    })
}

/// Amount tagged with "Cr" for credits, e.g. "1,200.50 Cr" or "CR 99".
/// Returns `(debit, credit)`.
pub(crate) fn tagged_amount(raw: Option<&str>) -> (f64, f64) {
    let lower = raw.unwrap_or("").to_lowercase();
    let digits: String = lower
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let value = leading_decimal(&digits);

    if lower.contains("cr") {
        (0.0, value)
    } else {
        (value, 0.0)
    }
}

/// Plain decimal column; unreadable or absent values are 0.
pub(crate) fn plain_amount(raw: Option<&str>) -> f64 {
    let cleaned: String = raw
        .unwrap_or("")
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    leading_decimal(&cleaned).abs()
}

/// Parse the longest numeric prefix ("12.5Dr" -> 12.5), or 0.
fn leading_decimal(s: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

pub(crate) fn build_transaction(
    date: NaiveDate,
    description: String,
    debit: f64,
    credit: f64,
    ctx: &ScanContext,
) -> Transaction {
    Transaction {
        date,
        currency: Currency::infer(&description),
        location: extract_location(&description),
        description,
        debit,
        credit,
        card_name: ctx.current_card_name.clone(),
        transaction_type: ctx.current_transaction_type,
    }
}
