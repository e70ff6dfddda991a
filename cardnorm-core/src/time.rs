//! Time utilities: an injectable "today" for dates that carry no year.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Statements are issued in India, so "today" defaults to IST.
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

pub trait Clock {
    /// Current calendar date as seen by the statement holder.
    fn today(&self) -> NaiveDate;
}

/// Wall clock evaluated in an IANA timezone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    /// Build a clock from a timezone name like "Asia/Kolkata".
    pub fn from_tz_name(tz: &str) -> Result<Self> {
        let tz: Tz = tz
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
        Ok(Self { tz })
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self { tz: chrono_tz::Asia::Kolkata }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// Clock pinned to a single date (tests, reproducible runs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
