use cardnorm_core::{TransactionType, UNKNOWN_CARD_NAME};
use serde::{Deserialize, Serialize};

/// Running state of one statement scan.
///
/// Section-marker rows flip the transaction type and cardholder rows switch
/// the card name; every transaction row after that inherits both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanContext {
    pub current_card_name: String,
    pub current_transaction_type: TransactionType,
}

impl Default for ScanContext {
    fn default() -> Self {
        Self {
            current_card_name: UNKNOWN_CARD_NAME.to_string(),
            current_transaction_type: TransactionType::Domestic,
        }
    }
}

impl ScanContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_section(&mut self, kind: TransactionType) {
        self.current_transaction_type = kind;
    }

    pub fn switch_card(&mut self, name: &str) {
        self.current_card_name = name.to_string();
    }
}
