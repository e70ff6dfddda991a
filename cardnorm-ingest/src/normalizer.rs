//! Statement normalizer: one ordered pass over the raw rows of a statement.
//!
//! Statements mix transaction rows with noise: blank lines, column headers,
//! "Domestic Transactions" / "International Transactions" section banners and
//! rows naming the cardholder. The scan tracks those in a [`ScanContext`] and
//! hands every row that looks like a transaction to the bank's row parser.

use cardnorm_core::{BankVariant, DateNormalizer, Transaction, TransactionType, looks_like_date};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::context::ScanContext;
use crate::parsers::parse_row;

/// Cardholder names recognized when no allow-list is configured.
pub const DEFAULT_CARDHOLDERS: [&str; 4] = ["Rahul", "Ritu", "Raj", "Rajat"];

const DOMESTIC_MARKERS: [&str; 2] = ["domestic transaction", "domestic trans"];
const INTERNATIONAL_MARKERS: [&str; 2] = ["international transaction", "international trans"];

/// Cells that only ever appear in column header rows.
const HEADER_CELLS: [&str; 3] = ["Date", "Transaction Details", "Transaction Description"];
const HEADER_TEXT: [&str; 2] = ["date", "transaction details"];

/// How a single raw row was treated by the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Blank,
    Section(TransactionType),
    Header,
    Transaction,
    /// Not blank, not a header, but no date where the bank puts one.
    Unclassified,
}

/// Counters for one scan; handy for logging and for the CLI summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub rows: usize,
    pub blank_rows: usize,
    pub section_markers: usize,
    pub header_rows: usize,
    pub unclassified_rows: usize,
    /// Rows that looked like transactions.
    pub candidate_rows: usize,
    /// Candidates the row parser rejected (bad date).
    pub dropped_rows: usize,
    pub transactions: usize,
    /// Cardholders in the order they were first seen.
    pub cardholders: Vec<String>,
}

impl ScanReport {
    fn note_cardholder(&mut self, name: &str) {
        if !self.cardholders.iter().any(|n| n == name) {
            self.cardholders.push(name.to_string());
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatementNormalizer {
    cardholders: Vec<String>,
    dates: DateNormalizer,
}

impl Default for StatementNormalizer {
    fn default() -> Self {
        Self::new(DateNormalizer::default())
    }
}

impl StatementNormalizer {
    pub fn new(dates: DateNormalizer) -> Self {
        Self {
            cardholders: DEFAULT_CARDHOLDERS.iter().map(|s| s.to_string()).collect(),
            dates,
        }
    }

    /// Replace the cardholder allow-list. Order matters: the first name found
    /// in a row wins.
    pub fn with_cardholders<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cardholders = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn cardholders(&self) -> &[String] {
        &self.cardholders
    }

    /// Normalize a whole statement. Row order is preserved; rows that cannot
    /// be parsed are skipped.
    pub fn normalize(&self, rows: &[Vec<String>], bank: BankVariant) -> Vec<Transaction> {
        self.normalize_with_report(rows, bank).0
    }

    pub fn normalize_with_report(
        &self,
        rows: &[Vec<String>],
        bank: BankVariant,
    ) -> (Vec<Transaction>, ScanReport) {
        let mut ctx = ScanContext::new();
        self.normalize_with_context(rows, bank, &mut ctx)
    }

    /// Same as [`normalize_with_report`](Self::normalize_with_report) but
    /// starts from, and leaves behind, the caller's context.
    pub fn normalize_with_context(
        &self,
        rows: &[Vec<String>],
        bank: BankVariant,
        ctx: &mut ScanContext,
    ) -> (Vec<Transaction>, ScanReport) {
        debug!("Processing {} rows for bank {}", rows.len(), bank);

        let mut out = Vec::new();
        let mut report = ScanReport {
            rows: rows.len(),
            ..ScanReport::default()
        };

        for (idx, row) in rows.iter().enumerate() {
            match self.classify(idx, row, bank, ctx, &mut report) {
                RowKind::Blank => report.blank_rows += 1,
                RowKind::Section(kind) => {
                    debug!(row = idx, "entering {} section", kind);
                    ctx.enter_section(kind);
                    report.section_markers += 1;
                }
                RowKind::Header => report.header_rows += 1,
                RowKind::Unclassified => report.unclassified_rows += 1,
                RowKind::Transaction => {
                    report.candidate_rows += 1;
                    match parse_row(row, bank, ctx, &self.dates) {
                        Ok(txn) => out.push(txn),
                        Err(err) => {
                            warn!(row = idx, "skipping row: {err}");
                            report.dropped_rows += 1;
                        }
                    }
                }
            }
        }

        report.transactions = out.len();
        debug!(
            "{} transactions from {} candidate rows ({} dropped)",
            report.transactions, report.candidate_rows, report.dropped_rows
        );
        (out, report)
    }

    /// Classify one row. Cardholder rows switch the card name as a side
    /// effect and are then classified like any other row.
    fn classify(
        &self,
        idx: usize,
        row: &[String],
        bank: BankVariant,
        ctx: &mut ScanContext,
        report: &mut ScanReport,
    ) -> RowKind {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            return RowKind::Blank;
        }

        let text = row.join(" ").to_lowercase();
        if DOMESTIC_MARKERS.iter().any(|m| text.contains(m)) {
            return RowKind::Section(TransactionType::Domestic);
        }
        if INTERNATIONAL_MARKERS.iter().any(|m| text.contains(m)) {
            return RowKind::Section(TransactionType::International);
        }

        if let Some(name) = self.cardholder_in(row) {
            info!(row = idx, "found card name: {name}");
            ctx.switch_card(name);
            report.note_cardholder(name);
        }

        if self.is_header(row, &text) {
            return RowKind::Header;
        }

        let has_date = row
            .get(bank.date_column())
            .is_some_and(|cell| looks_like_date(cell));
        if has_date {
            RowKind::Transaction
        } else {
            RowKind::Unclassified
        }
    }

    fn cardholder_in(&self, row: &[String]) -> Option<&str> {
        self.cardholders
            .iter()
            .find(|name| row.iter().any(|cell| cell.trim() == name.as_str()))
            .map(String::as_str)
    }

    fn is_header(&self, row: &[String], text: &str) -> bool {
        let first_is_name = row
            .first()
            .is_some_and(|first| self.cardholders.iter().any(|n| n == first.trim()));

        row.iter().any(|cell| HEADER_CELLS.contains(&cell.trim()))
            || first_is_name
            || HEADER_TEXT.iter().any(|t| text.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::test_support::{dates, row};
    use cardnorm_core::Currency;

    fn normalizer() -> StatementNormalizer {
        StatementNormalizer::new(dates())
    }

    fn hdfc_statement() -> Vec<Vec<String>> {
        vec![
            row(&["HDFC Bank Credit Card Statement"]),
            row(&["", "", ""]),
            row(&["Domestic Transactions"]),
            row(&["Date", "Transaction Description", "Amount"]),
            row(&["Rahul"]),
            row(&["01/01/2024", "SWIGGY BANGALORE", "350.00"]),
            row(&["02/01/2024", "PAYMENT THANK YOU", "5,000.00 Cr"]),
            row(&["International Transactions"]),
            row(&["05-01-2024", "AMAZON EUR PARIS", "CR 1200.50"]),
            row(&["06-01-2024", "STARBUCKS USD LONDON", "12.00"]),
            row(&["07-01-2024", "HOTEL ROME EUR", "210.40"]),
            row(&["Ritu"]),
            row(&["31-02-2024", "BROKEN ROW", "1.00"]),
            row(&["08-01-2024", "NETFLIX USD", "9.99"]),
            row(&["Domestic Transactions"]),
            row(&["09-01-2024", "BIGBASKET PUNE", "1,499.00"]),
        ]
    }

    #[test]
    fn test_full_hdfc_statement() {
        let (txns, report) = normalizer().normalize_with_report(&hdfc_statement(), BankVariant::Hdfc);

        assert_eq!(txns.len(), 7);
        assert_eq!(report.rows, 16);
        assert_eq!(report.blank_rows, 1);
        assert_eq!(report.section_markers, 3);
        assert_eq!(report.header_rows, 3);
        assert_eq!(report.unclassified_rows, 1);
        assert_eq!(report.candidate_rows, 8);
        assert_eq!(report.dropped_rows, 1);
        assert_eq!(report.transactions, 7);
        assert_eq!(report.cardholders, vec!["Rahul", "Ritu"]);

        assert_eq!(txns[0].card_name, "Rahul");
        assert_eq!(txns[0].debit, 350.0);
        assert_eq!(txns[1].credit, 5000.0);

        let paris = &txns[2];
        assert_eq!(paris.date.to_string(), "2024-01-05");
        assert_eq!(paris.credit, 1200.50);
        assert_eq!(paris.currency, Currency::Eur);
        assert_eq!(paris.transaction_type, TransactionType::International);

        let netflix = &txns[5];
        assert_eq!(netflix.card_name, "Ritu");
        assert_eq!(netflix.location, "netflix");

        let last = &txns[6];
        assert_eq!(last.transaction_type, TransactionType::Domestic);
        assert_eq!(last.card_name, "Ritu");
    }

    #[test]
    fn test_section_marker_is_inherited_until_flipped() {
        let rows = vec![
            row(&["International Transaction"]),
            row(&["10-02-2024", "CAFE A", "1"]),
            row(&["11-02-2024", "CAFE B", "2"]),
            row(&["12-02-2024", "CAFE C", "3"]),
            row(&["Domestic Transaction"]),
            row(&["13-02-2024", "CAFE D", "4"]),
        ];
        let txns = normalizer().normalize(&rows, BankVariant::Hdfc);
        let kinds: Vec<_> = txns.iter().map(|t| t.transaction_type).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionType::International,
                TransactionType::International,
                TransactionType::International,
                TransactionType::Domestic,
            ]
        );
    }

    #[test]
    fn test_type_comes_from_section_not_currency() {
        let rows = vec![row(&["10-02-2024", "AMAZON USD SEATTLE", "20"])];
        let txns = normalizer().normalize(&rows, BankVariant::Hdfc);
        assert_eq!(txns[0].currency, Currency::Usd);
        assert_eq!(txns[0].transaction_type, TransactionType::Domestic);
    }

    #[test]
    fn test_idfc_uses_second_column_for_classification() {
        let rows = vec![
            row(&["Transaction Details", "Date", "Amount"]),
            row(&["MAKEMYTRIP MUMBAI", "21/06/2024", "3,100.00"]),
            // date in the wrong column for IDFC: not a transaction row
            row(&["21/06/2024", "ZOMATO DELHI", "100"]),
        ];
        let (txns, report) = normalizer().normalize_with_report(&rows, BankVariant::Idfc);
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description, "MAKEMYTRIP MUMBAI");
        assert_eq!(txns[0].debit, 3100.0);
        assert_eq!(report.unclassified_rows, 1);
    }

    #[test]
    fn test_cardholder_on_transaction_row() {
        let rows = vec![row(&["10-02-2024", "UBER MUMBAI", "250", "Raj"])];
        let txns = normalizer().normalize(&rows, BankVariant::Hdfc);
        assert_eq!(txns[0].card_name, "Raj");
    }

    #[test]
    fn test_cardholder_match_is_exact_cell() {
        let rows = vec![
            row(&["Rajat"]),
            row(&["10-02-2024", "UBER MUMBAI", "250"]),
        ];
        let txns = normalizer().normalize(&rows, BankVariant::Hdfc);
        assert_eq!(txns[0].card_name, "Rajat");
    }

    #[test]
    fn test_custom_cardholders() {
        let n = normalizer().with_cardholders(["Anita"]);
        let rows = vec![
            row(&["Rahul"]),
            row(&["Anita"]),
            row(&["10-02-2024", "UBER MUMBAI", "250"]),
        ];
        let txns = n.normalize(&rows, BankVariant::Hdfc);
        assert_eq!(txns[0].card_name, "Anita");
    }

    #[test]
    fn test_description_containing_date_word_is_treated_as_header() {
        let rows = vec![row(&["10-02-2024", "PLAN UPDATE FEE", "99"])];
        assert!(normalizer().normalize(&rows, BankVariant::Hdfc).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let n = normalizer();
        let rows = hdfc_statement();
        assert_eq!(
            n.normalize(&rows, BankVariant::Hdfc),
            n.normalize(&rows, BankVariant::Hdfc)
        );
    }

    #[test]
    fn test_explicit_context_is_seeded_and_updated() {
        let mut ctx = ScanContext::new();
        ctx.switch_card("Ritu");
        ctx.enter_section(TransactionType::International);

        let rows = vec![
            row(&["10-02-2024", "CAFE", "1"]),
            row(&["Domestic Transactions"]),
        ];
        let (txns, _) = normalizer().normalize_with_context(&rows, BankVariant::Axis, &mut ctx);
        assert_eq!(txns[0].card_name, "Ritu");
        assert_eq!(txns[0].transaction_type, TransactionType::International);
        assert_eq!(ctx.current_transaction_type, TransactionType::Domestic);
    }

    #[test]
    fn test_empty_input() {
        let (txns, report) = normalizer().normalize_with_report(&[], BankVariant::Icici);
        assert!(txns.is_empty());
        assert_eq!(report, ScanReport::default());
    }
}
