// Runtime configuration read from the environment.
//
// - VEHICLE_COMMANDS_ADDR: socket address to bind, defaults to 0.0.0.0:8080.
// - VEHICLE_COMMANDS_VINS: comma separated VINs to serve, defaults to none.
// - VEHICLE_COMMANDS_HISTORY: calls each dry-run sink keeps, defaults to DEFAULT_HISTORY.

use std::net::SocketAddr;

use thiserror::Error;

use crate::shared::infrastructure::execution_sink::in_memory::DEFAULT_HISTORY;

pub const ADDR_VAR: &str = "VEHICLE_COMMANDS_ADDR";
pub const VINS_VAR: &str = "VEHICLE_COMMANDS_VINS";
pub const HISTORY_VAR: &str = "VEHICLE_COMMANDS_HISTORY";
const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const VIN_LENGTH: usize = 17;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a socket address: {value}")]
    InvalidAddress { var: &'static str, value: String },

    #[error("{value} is not a VIN (expected 17 ASCII letters and digits)")]
    InvalidVin { value: String },

    #[error("{var} is not a positive call count: {value}")]
    InvalidHistory { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub vins: Vec<String>,
    pub history: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                var: ADDR_VAR,
                value: raw_addr.clone(),
            })?;

        let vins = lookup(VINS_VAR)
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|vin| !vin.is_empty())
            .map(parse_vin)
            .collect::<Result<Vec<_>, _>>()?;

        let history = match lookup(HISTORY_VAR) {
            None => DEFAULT_HISTORY,
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|history| *history > 0)
                .ok_or_else(|| ConfigError::InvalidHistory {
                    var: HISTORY_VAR,
                    value: raw.clone(),
                })?,
        };

        Ok(Self {
            addr,
            vins,
            history,
        })
    }
}

fn parse_vin(value: &str) -> Result<String, ConfigError> {
    if value.len() == VIN_LENGTH && value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(value.to_ascii_uppercase())
    } else {
        Err(ConfigError::InvalidVin {
            value: value.to_string(),
        })
    }
}
