//! IDFC FIRST credit card statements.
//!
//! Layout: `Transaction Details, Date, Amount` with a "Cr"-tagged amount.
//! Exports drift between versions, so when column 1 does not hold a usable
//! date the first other column that does is used instead.

use cardnorm_core::{DateNormalizer, Transaction};
use chrono::NaiveDate;

use super::{RowParser, build_transaction, cell, date_at, description_at, tagged_amount};
use crate::context::ScanContext;
use crate::error::RowError;

const DATE_COLUMN: usize = 1;

#[derive(Debug, Clone, Copy, Default)]
pub struct IdfcParser;

impl IdfcParser {
    fn resolve_date(row: &[String], dates: &DateNormalizer) -> Result<NaiveDate, RowError> {
        match date_at(row, DATE_COLUMN, dates) {
            Ok(date) => Ok(date),
            Err(err) => row
                .iter()
                .enumerate()
                .filter(|(idx, _)| *idx != DATE_COLUMN)
                .find_map(|(_, raw)| dates.parse(raw))
                .ok_or(err),
        }
    }
}

impl RowParser for IdfcParser {
    fn parse(
        &self,
        row: &[String],
        ctx: &ScanContext,
        dates: &DateNormalizer,
    ) -> Result<Transaction, RowError> {
        let date = Self::resolve_date(row, dates)?;
        let description = description_at(row, 0);
        let (debit, credit) = tagged_amount(cell(row, 2));

        Ok(build_transaction(date, description, debit, credit, ctx))
    }
}
