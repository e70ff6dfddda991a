//! Axis Bank credit card statements.
//!
//! Layout: `Date, Debit, Credit, Transaction Details`; the description comes last.

use cardnorm_core::{DateNormalizer, Transaction};

use super::{RowParser, build_transaction, cell, date_at, description_at, plain_amount};
use crate::context::ScanContext;
use crate::error::RowError;

#[derive(Debug, Clone, Copy, Default)]
pub struct AxisParser;

impl RowParser for AxisParser {
    fn parse(
        &self,
        row: &[String],
        ctx: &ScanContext,
        dates: &DateNormalizer,
    ) -> Result<Transaction, RowError> {
        let date = date_at(row, 0, dates)?;
        let debit = plain_amount(cell(row, 1));
        let credit = plain_amount(cell(row, 2));
        let description = description_at(row, 3);

        Ok(build_transaction(date, description, debit, credit, ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::test_support::{dates, row};
    use cardnorm_core::{Currency, TransactionType};

    #[test]
    fn test_axis_layout() {
        let mut ctx = ScanContext::default();
        ctx.switch_card("Rajat");
        ctx.enter_section(TransactionType::International);

        let t = AxisParser
            .parse(&row(&["3-4-24", "", "15.75", "REFUND EUR BERLIN"]), &ctx, &dates())
            .unwrap();

        assert_eq!(t.date.to_string(), "2024-04-03");
        assert_eq!(t.debit, 0.0);
        assert_eq!(t.credit, 15.75);
        assert_eq!(t.currency, Currency::Eur);
        assert_eq!(t.location, "berlin");
        assert_eq!(t.card_name, "Rajat");
        assert_eq!(t.transaction_type, TransactionType::International);
    }

    #[test]
    fn test_short_row_defaults_description() {
        let t = AxisParser
            .parse(&row(&["03-04-2024", "250"]), &ScanContext::default(), &dates())
            .unwrap();
        assert_eq!(t.debit, 250.0);
        assert_eq!(t.description, "N/A");
    }
}
