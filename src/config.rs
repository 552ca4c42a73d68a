//! Ledger configuration: operating hours, capacity limits and the fixed fee.

use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::ledger::validation::parse_clock;

/// What cancelling a reservation does to its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancellationPolicy {
    /// The record is deleted from the ledger.
    #[default]
    Remove,
    /// The record stays in place with status `Cancelled`.
    Retain,
}

impl FromStr for CancellationPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remove" => Ok(CancellationPolicy::Remove),
            "retain" => Ok(CancellationPolicy::Retain),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_CANCELLATION,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("Operating hours are invalid: opening {opening}, closing {closing}")]
    InvalidOperatingHours { opening: String, closing: String },
    #[error("{0} must be at least 1")]
    ZeroLimit(&'static str),
}

const ENV_OPENING: &str = "RRS_OPENING_TIME";
const ENV_CLOSING: &str = "RRS_CLOSING_TIME";
const ENV_MAX_PEOPLE: &str = "RRS_MAX_PEOPLE_PER_TABLE";
const ENV_MAX_TABLES: &str = "RRS_MAX_TABLES_PER_DATE";
const ENV_FEE: &str = "RRS_RESERVATION_FEE";
const ENV_CANCELLATION: &str = "RRS_CANCELLATION_POLICY";
const ENV_CURRENCY: &str = "RRS_CURRENCY";

/// Configuration handed to the ledger at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerConfig {
    pub opening_time: String,
    pub closing_time: String,
    pub max_people_per_table: u32,
    pub max_tables_per_date: u32,
    pub reservation_fee: f64,
    pub cancellation: CancellationPolicy,
    /// Label printed next to income totals.
    pub currency: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            opening_time: "09:00".to_string(),
            closing_time: "21:00".to_string(),
            max_people_per_table: 6,
            max_tables_per_date: 2,
            reservation_fee: 150.0,
            cancellation: CancellationPolicy::Remove,
            currency: "SAR".to_string(),
        }
    }
}

impl LedgerConfig {
    /// Loads `.env` (if present) and applies any `RRS_*` overrides on top of the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(opening) = lookup(ENV_OPENING) {
            config.opening_time = opening.trim().to_string();
        }
        if let Some(closing) = lookup(ENV_CLOSING) {
            config.closing_time = closing.trim().to_string();
        }
        if let Some(value) = lookup(ENV_MAX_PEOPLE) {
            config.max_people_per_table = parse_value(ENV_MAX_PEOPLE, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_TABLES) {
            config.max_tables_per_date = parse_value(ENV_MAX_TABLES, &value)?;
        }
        if let Some(value) = lookup(ENV_FEE) {
            config.reservation_fee = parse_value(ENV_FEE, &value)?;
        }
        if let Some(value) = lookup(ENV_CANCELLATION) {
            config.cancellation = value.parse()?;
        }
        if let Some(currency) = lookup(ENV_CURRENCY) {
            config.currency = currency.trim().to_string();
        }

        config.validate()?;
        debug!(?config, "Ledger configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match (parse_clock(&self.opening_time), parse_clock(&self.closing_time)) {
            (Some(opening), Some(closing))
                if opening <= closing && is_wall_clock(opening) && is_wall_clock(closing) => {}
            _ => {
                return Err(ConfigError::InvalidOperatingHours {
                    opening: self.opening_time.clone(),
                    closing: self.closing_time.clone(),
                })
            }
        }
        if self.max_people_per_table == 0 {
            return Err(ConfigError::ZeroLimit(ENV_MAX_PEOPLE));
        }
        if self.max_tables_per_date == 0 {
            return Err(ConfigError::ZeroLimit(ENV_MAX_TABLES));
        }
        if !self.reservation_fee.is_finite() || self.reservation_fee < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: ENV_FEE,
                value: self.reservation_fee.to_string(),
            });
        }
        Ok(())
    }
}

fn is_wall_clock((hour, minute): (u32, u32)) -> bool {
    hour <= 23 && minute <= 59
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
