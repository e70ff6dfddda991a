//! Normalized transaction record shared by every bank parser.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used when a text column is absent or cannot be derived.
pub const NOT_AVAILABLE: &str = "N/A";

/// Card name used until a cardholder row is seen.
pub const UNKNOWN_CARD_NAME: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "INR")]
    Inr,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    /// Infer currency from literal markers in a description.
    /// EUR wins over USD; anything else is INR.
    pub fn infer(description: &str) -> Self {
        if description.contains("EUR") {
            Currency::Eur
        } else if description.contains("USD") {
            Currency::Usd
        } else {
            Currency::Inr
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionType {
    #[default]
    Domestic,
    International,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Domestic => "Domestic",
            TransactionType::International => "International",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized output of statement parsers (bank-agnostic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Canonical date, serialized as YYYY-MM-DD
    pub date: NaiveDate,
    pub description: String,
    /// Amount charged to the card; never negative.
    pub debit: f64,
    /// Amount refunded or paid to the card; never negative.
    pub credit: f64,
    pub currency: Currency,
    pub card_name: String,
    pub transaction_type: TransactionType,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_inference_order() {
        assert_eq!(Currency::infer("AMAZON EUR PARIS"), Currency::Eur);
        assert_eq!(Currency::infer("UBER USD NYC"), Currency::Usd);
        assert_eq!(Currency::infer("USD 12 then EUR"), Currency::Eur);
        assert_eq!(Currency::infer("SWIGGY BANGALORE"), Currency::Inr);
        // case-sensitive literal match
        assert_eq!(Currency::infer("eur shop"), Currency::Inr);
    }

    #[test]
    fn test_serializes_display_names() {
        let t = Transaction {
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            description: "AMAZON EUR PARIS".to_string(),
            debit: 0.0,
            credit: 1200.5,
            currency: Currency::Eur,
            card_name: "Rahul".to_string(),
            transaction_type: TransactionType::International,
            location: "paris".to_string(),
        };
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["date"], "2024-01-05");
        assert_eq!(v["currency"], "EUR");
        assert_eq!(v["transaction_type"], "International");
    }
}
