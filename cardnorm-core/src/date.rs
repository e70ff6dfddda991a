//! Date normalization for the handful of layouts Indian card statements use.
//!
//! Patterns are tried in a fixed priority order and the first structural
//! match wins. Day-first layouts come before the ISO layout; a year-less
//! `DD-MM` is resolved against the injected clock.

use chrono::{Datelike, NaiveDate};
use regex::{Captures, Regex};
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::time::{Clock, SystemClock};

/// String form of a date that could not be normalized.
pub const INVALID_DATE: &str = "Invalid Date";

/// Canonical output layout (ISO).
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    DayMonthYear,
    YearMonthDay,
    /// No year: taken from the clock.
    DayMonth,
}

struct DatePattern {
    regex: Regex,
    order: FieldOrder,
}

// A match may follow leading text ("Txn 05/01/2024") but never another digit
// or date separator, so `DD-MM-YY` cannot claim the tail of `2024-01-05`. It
// must end at whitespace or end of input; a trailing time is accepted.
static PATTERNS: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    [
        (r"(?:^|[^\d/-])(\d{2})-(\d{2})-(\d{4})(?:\s|$)", FieldOrder::DayMonthYear),
        (r"(?:^|[^\d/-])(\d{2})/(\d{2})/(\d{4})(?:\s|$)", FieldOrder::DayMonthYear),
        (r"(?:^|[^\d/-])(\d{2})-(\d{2})-(\d{2})(?:\s|$)", FieldOrder::DayMonthYear),
        (r"(?:^|[^\d/-])(\d{1,2})-(\d{1,2})-(\d{4})(?:\s|$)", FieldOrder::DayMonthYear),
        (r"(?:^|[^\d/-])(\d{1,2})/(\d{1,2})/(\d{4})(?:\s|$)", FieldOrder::DayMonthYear),
        (r"(?:^|[^\d/-])(\d{1,2})-(\d{1,2})-(\d{2})(?:\s|$)", FieldOrder::DayMonthYear),
        (r"(?:^|[^\d/-])(\d{4})-(\d{2})-(\d{2})(?:\s|$)", FieldOrder::YearMonthDay),
        (r"(?:^|[^\d/-])(\d{2})-(\d{2})(?:\s|$)", FieldOrder::DayMonth),
    ]
    .into_iter()
    .map(|(pattern, order)| DatePattern {
        regex: Regex::new(pattern).expect("static regex"),
        order,
    })
    .collect()
});

/// Loose "looks like a date" check used to spot transaction rows.
/// Accepts both `D-M-YY` and the stricter `DD-MM-YYYY` shapes, either separator.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}[-/]\d{1,2}[-/](\d{2}|\d{4})").expect("static regex"));

pub fn looks_like_date(cell: &str) -> bool {
    DATE_SHAPE.is_match(cell)
}

/// Parses heterogeneous statement dates into a single canonical form.
#[derive(Clone)]
pub struct DateNormalizer {
    clock: Arc<dyn Clock + Send + Sync>,
}

impl fmt::Debug for DateNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateNormalizer")
            .field("today", &self.clock.today())
            .finish()
    }
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new(SystemClock::default())
    }
}

impl DateNormalizer {
    pub fn new(clock: impl Clock + Send + Sync + 'static) -> Self {
        Self { clock: Arc::new(clock) }
    }

    /// Parse a raw cell into a calendar date, or None when no layout fits.
    pub fn parse(&self, raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        // A structural match that is not a real calendar day falls through
        // to the later layouts.
        PATTERNS.iter().find_map(|pattern| {
            let caps = pattern.regex.captures(raw)?;
            self.date_from_captures(&caps, pattern.order)
        })
    }

    /// Canonical `YYYY-MM-DD` string, or [`INVALID_DATE`].
    pub fn normalize(&self, raw: &str) -> String {
        match self.parse(raw) {
            Some(date) => date.format(CANONICAL_FORMAT).to_string(),
            None => INVALID_DATE.to_string(),
        }
    }

    fn date_from_captures(&self, caps: &Captures<'_>, order: FieldOrder) -> Option<NaiveDate> {
        let (year, month, day) = match order {
            FieldOrder::DayMonthYear => (expand_year(&caps[3])?, &caps[2], &caps[1]),
            FieldOrder::YearMonthDay => (expand_year(&caps[1])?, &caps[2], &caps[3]),
            FieldOrder::DayMonth => (self.clock.today().year(), &caps[2], &caps[1]),
        };

        let month: u32 = month.parse().ok()?;
        let day: u32 = day.parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }

        // Bounds above are generic; the calendar rejects e.g. 31 February.
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// Two-digit years are read as 20YY.
fn expand_year(raw: &str) -> Option<i32> {
    let year: i32 = raw.parse().ok()?;
    if raw.len() == 2 { Some(2000 + year) } else { Some(year) }
}
