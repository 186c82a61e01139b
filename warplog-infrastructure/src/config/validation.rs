use std::net::SocketAddr;

use thiserror::Error;

/// Hours east of UTC a real-world timezone can be.
pub const MAX_UTC_OFFSET_HOURS: i32 = 14;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid bind_addr '{0}'")]
    InvalidBindAddr(String),
    #[error("source_utc_offset_hours must be within ±14 hours, got {0}")]
    OffsetOutOfRange(i32),
    #[error("{0} must be greater than 0")]
    ZeroLimit(&'static str),
    #[error("{0} must not be empty")]
    EmptyPath(&'static str),
}

pub fn validate_bind_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidBindAddr(value.to_string()))
}

pub fn validate_utc_offset(hours: i32) -> Result<(), ConfigError> {
    if hours.abs() > MAX_UTC_OFFSET_HOURS {
        return Err(ConfigError::OffsetOutOfRange(hours));
    }
    Ok(())
}

pub fn validate_positive(name: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::ZeroLimit(name));
    }
    Ok(())
}

pub fn validate_path(name: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyPath(name));
    }
    Ok(())
}
