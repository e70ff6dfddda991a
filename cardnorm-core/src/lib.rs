//! cardnorm-core: shared types and pure helpers for card statement normalization

pub mod bank;
pub mod date;
pub mod location;
pub mod time;
pub mod types;

pub use bank::BankVariant;
pub use date::{DateNormalizer, INVALID_DATE, looks_like_date};
pub use location::extract_location;
pub use time::{Clock, FixedClock, SystemClock};
pub use types::{Currency, NOT_AVAILABLE, Transaction, TransactionType, UNKNOWN_CARD_NAME};
