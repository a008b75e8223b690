// Service configuration read from the environment.
//
// Notes
// - The accounting threshold and standard daily hours have no defaults. A
//   missing value stops the service at startup.
// - `from_lookup` runs the same parsing over any key source so tests never
//   touch the process environment.

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;
use thiserror::Error;

use crate::modules::attendance::core::accounting_policy::{AccountingPolicy, PolicyError};

pub const THRESHOLD_HOURS: &str = "ATTENDANCE_THRESHOLD_HOURS";
pub const STANDARD_DAILY_HOURS: &str = "ATTENDANCE_STANDARD_DAILY_HOURS";
pub const ABSENT_DAY_VACATION: &str = "ATTENDANCE_ABSENT_DAY_VACATION";
pub const BIND_ADDR: &str = "ATTENDANCE_BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub policy: AccountingPolicy,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let threshold: f64 = required(&lookup, THRESHOLD_HOURS)?;
        let standard_daily_hours: f64 = required(&lookup, STANDARD_DAILY_HOURS)?;
        let absent_day_vacation = match lookup(ABSENT_DAY_VACATION) {
            None => false,
            Some(raw) => parse_flag(ABSENT_DAY_VACATION, &raw)?,
        };
        let bind_addr = lookup(BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = parse(BIND_ADDR, &bind_addr)?;

        Ok(Self {
            policy: AccountingPolicy::new(threshold, standard_daily_hours, absent_day_vacation)?,
            bind_addr,
        })
    }
}

fn required<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<T, ConfigError> {
    let raw = lookup(key).ok_or(ConfigError::Missing(key))?;
    parse(key, &raw)
}

fn parse<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
        }),
    }
}
