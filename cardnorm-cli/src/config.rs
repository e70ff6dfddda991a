use anyhow::{Context, Result};
use cardnorm_core::{DateNormalizer, SystemClock, time::DEFAULT_TIMEZONE};
use cardnorm_ingest::{DEFAULT_CARDHOLDERS, StatementNormalizer};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::state::{cardnorm_home, ensure_cardnorm_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanSection,
    pub dates: DatesSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSection {
    /// Names that mark the start of a cardholder's block, matched as whole cells.
    pub cardholders: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatesSection {
    /// IANA timezone used to pick the year for dates printed without one.
    pub timezone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Where converted files go; next to the input when unset.
    pub directory: Option<PathBuf>,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            cardholders: DEFAULT_CARDHOLDERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for DatesSection {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl Config {
    pub fn normalizer(&self) -> Result<StatementNormalizer> {
        let clock = SystemClock::from_tz_name(&self.dates.timezone)
            .context("invalid [dates] timezone in config")?;
        Ok(StatementNormalizer::new(DateNormalizer::new(clock))
            .with_cardholders(self.scan.cardholders.iter().cloned()))
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(cardnorm_home()?.join("config.toml"))
}

/// Load `explicit` if given, else `~/.cardnorm/config.toml`. A missing default
/// file means defaults; a missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = config_path()?;
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    debug!("Loaded config from {}", p.display());
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config(explicit: Option<&Path>) -> Result<()> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => ensure_cardnorm_home()?.join("config.toml"),
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}
