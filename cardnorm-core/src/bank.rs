//! Supported card issuers and how a statement is attributed to one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BankVariant {
    #[serde(rename = "HDFC")]
    Hdfc,
    #[serde(rename = "ICICI")]
    Icici,
    #[serde(rename = "IDFC")]
    Idfc,
    #[serde(rename = "AXIS")]
    Axis,
}

impl BankVariant {
    /// Detection order matters: the first matching marker wins.
    pub const ALL: [BankVariant; 4] = [
        BankVariant::Hdfc,
        BankVariant::Icici,
        BankVariant::Idfc,
        BankVariant::Axis,
    ];

    /// Identify the issuer from a statement file name, e.g. `HDFC-Input-Jan.csv`.
    ///
    /// Returns None when no known bank marker is present.
    pub fn detect_from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|bank| lower.contains(bank.file_marker()))
    }

    /// Lower-case marker looked for in file names.
    pub fn file_marker(&self) -> &'static str {
        match self {
            BankVariant::Hdfc => "hdfc",
            BankVariant::Icici => "icici",
            BankVariant::Idfc => "idfc",
            BankVariant::Axis => "axis",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BankVariant::Hdfc => "HDFC",
            BankVariant::Icici => "ICICI",
            BankVariant::Idfc => "IDFC",
            BankVariant::Axis => "AXIS",
        }
    }

    /// Column holding the transaction date in this issuer's layout.
    pub fn date_column(&self) -> usize {
        match self {
            BankVariant::Idfc => 1,
            BankVariant::Hdfc | BankVariant::Icici | BankVariant::Axis => 0,
        }
    }
}

impl fmt::Display for BankVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BankVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|bank| bank.file_marker() == wanted)
            .ok_or_else(|| anyhow::anyhow!("unsupported bank: {s} (expected hdfc, icici, idfc or axis)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_file_name() {
        assert_eq!(
            BankVariant::detect_from_file_name("HDFC-Input-Jan.csv"),
            Some(BankVariant::Hdfc)
        );
        assert_eq!(
            BankVariant::detect_from_file_name("statement_icici_2024.CSV"),
            Some(BankVariant::Icici)
        );
        assert_eq!(
            BankVariant::detect_from_file_name("IDFC-Input-Case3.csv"),
            Some(BankVariant::Idfc)
        );
        assert_eq!(
            BankVariant::detect_from_file_name("Axis-Input-Case4.csv"),
            Some(BankVariant::Axis)
        );
        assert_eq!(BankVariant::detect_from_file_name("sbi.csv"), None);
    }

    #[test]
    fn test_detect_prefers_earlier_marker() {
        assert_eq!(
            BankVariant::detect_from_file_name("axis-vs-hdfc.csv"),
            Some(BankVariant::Hdfc)
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("ICICI".parse::<BankVariant>().unwrap(), BankVariant::Icici);
        assert_eq!(" axis ".parse::<BankVariant>().unwrap(), BankVariant::Axis);
        assert!("kotak".parse::<BankVariant>().is_err());
    }

    #[test]
    fn test_date_column() {
        assert_eq!(BankVariant::Idfc.date_column(), 1);
        assert_eq!(BankVariant::Axis.date_column(), 0);
    }
}
