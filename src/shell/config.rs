// Shell configuration loaded from environment variables.
//
// Every variable is optional. `from_lookup` takes any key lookup so tests never touch the
// process environment.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

pub const LOG_VAR: &str = "FACT_LEDGER_LOG";
pub const CURRENCY_VAR: &str = "FACT_LEDGER_CURRENCY";
pub const OPENING_BALANCE_VAR: &str = "FACT_LEDGER_OPENING_BALANCE";
pub const CONCURRENT_WRITERS_VAR: &str = "FACT_LEDGER_CONCURRENT_WRITERS";
pub const MAX_CONFLICT_RETRIES_VAR: &str = "FACT_LEDGER_MAX_CONFLICT_RETRIES";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Log filter used when RUST_LOG is not set.
    pub log_filter: String,
    pub currency: String,
    pub opening_balance: Decimal,
    /// Number of tasks depositing into the same account at once. At least 1.
    pub concurrent_writers: usize,
    /// Conflicts a handler absorbs before surfacing VersionMismatch.
    pub max_conflict_retries: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_owned(),
            currency: "EUR".to_owned(),
            opening_balance: Decimal::new(1000, 0),
            concurrent_writers: 8,
            max_conflict_retries: 16,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let concurrent_writers =
            parsed(&lookup, CONCURRENT_WRITERS_VAR, defaults.concurrent_writers)?;
        if concurrent_writers == 0 {
            return Err(ConfigError::Invalid {
                name: CONCURRENT_WRITERS_VAR,
                reason: "must be at least 1".to_owned(),
            });
        }

        Ok(Self {
            log_filter: lookup(LOG_VAR).unwrap_or(defaults.log_filter),
            currency: lookup(CURRENCY_VAR).unwrap_or(defaults.currency),
            opening_balance: parsed(&lookup, OPENING_BALANCE_VAR, defaults.opening_balance)?,
            concurrent_writers,
            max_conflict_retries: parsed(
                &lookup,
                MAX_CONFLICT_RETRIES_VAR,
                defaults.max_conflict_retries,
            )?,
        })
    }
}

fn parsed<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: format!("{raw:?}: {e}"),
        }),
    }
}
