//! HDFC credit card statements.
//!
//! Layout: `Date, Transaction Description, Amount`, where the amount carries
//! a "Cr" tag for credits:
//!   05/01/2024,AMAZON EUR PARIS,CR 1200.50
//!   06/01/2024,SWIGGY BANGALORE,350.00

use cardnorm_core::{DateNormalizer, Transaction};

use super::{RowParser, build_transaction, cell, date_at, description_at, tagged_amount};
use crate::context::ScanContext;
use crate::error::RowError;

#[derive(Debug, Clone, Copy, Default)]
pub struct HdfcParser;

impl RowParser for HdfcParser {
    fn parse(
        &self,
        row: &[String],
        ctx: &ScanContext,
        dates: &DateNormalizer,
    ) -> Result<Transaction, RowError> {
        let date = date_at(row, 0, dates)?;
        let description = description_at(row, 1);
        let (debit, credit) = tagged_amount(cell(row, 2));

        Ok(build_transaction(date, description, debit, credit, ctx))
    }
}
