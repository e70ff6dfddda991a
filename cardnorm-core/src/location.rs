//! Coarse merchant location: the last word of the description once currency
//! markers are removed.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::NOT_AVAILABLE;

static CURRENCY_TOKENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"EUR|USD|INR|POUND").expect("static regex"));

/// Extract a lower-cased location token, or "N/A" when there is nothing left.
pub fn extract_location(description: &str) -> String {
    let cleaned = CURRENCY_TOKENS.replace_all(description, "");
    cleaned
        .split_whitespace()
        .last()
        .map(str::to_lowercase)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_word_after_stripping_currency() {
        assert_eq!(extract_location("Payment to STARBUCKS USD LONDON"), "london");
        assert_eq!(extract_location("AMAZON EUR PARIS"), "paris");
        assert_eq!(extract_location("HOTEL ROME EUR"), "rome");
        assert_eq!(extract_location("SWIGGY   BANGALORE  "), "bangalore");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(extract_location(""), "N/A");
        assert_eq!(extract_location("   "), "N/A");
        assert_eq!(extract_location("USD EUR"), "N/A");
    }

    #[test]
    fn test_currency_tokens_are_literal_and_case_sensitive() {
        // embedded tokens are removed too
        assert_eq!(extract_location("TAXI EURO"), "o");
        assert_eq!(extract_location("CAFE usd"), "usd");
        assert_eq!(extract_location("HARRODS POUND"), "harrods");
    }
}
