//! ICICI credit card statements.
//!
//! Layout: `Date, Details, Debit, Credit` with separate amount columns.

use cardnorm_core::{DateNormalizer, Transaction};

use super::{RowParser, build_transaction, cell, date_at, description_at, plain_amount};
use crate::context::ScanContext;
use crate::error::RowError;

#[derive(Debug, Clone, Copy, Default)]
pub struct IciciParser;

impl RowParser for IciciParser {
    fn parse(
        &self,
        row: &[String],
        ctx: &ScanContext,
        dates: &DateNormalizer,
    ) -> Result<Transaction, RowError> {
        let date = date_at(row, 0, dates)?;
        let description = description_at(row, 1);
        let debit = plain_amount(cell(row, 2));
        let credit = plain_amount(cell(row, 3));

        Ok(build_transaction(date, description, debit, credit, ctx))
    }
}
