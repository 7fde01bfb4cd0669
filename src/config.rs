use std::{env, fmt::Display, str::FromStr};

use chrono::{DateTime, FixedOffset};
use thiserror::Error;
use tracing::info;

/// Opening instant of the conference: 09:00 Beijing time, 22 November 2025
pub const DEFAULT_CONFERENCE_START: &str = "2025-11-22T09:00:00+08:00";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Server settings read from the environment (and `.env` via dotenvy)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub client_url: String,
    pub conference_start: DateTime<FixedOffset>,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let conference_start = {
            let raw = or_default(&lookup, "CONFERENCE_START", DEFAULT_CONFERENCE_START);
            DateTime::parse_from_rfc3339(&raw).map_err(|e| ConfigError::Invalid {
                key: "CONFERENCE_START",
                value: raw.clone(),
                reason: e.to_string(),
            })?
        };

        Ok(Self {
            database_url,
            host: or_default(&lookup, "SERVER_HOST", "0.0.0.0"),
            port: parse_or_default(&lookup, "SERVER_PORT", "2022")?,
            client_url: or_default(&lookup, "CLIENT_URL", "http://localhost:3000"),
            conference_start,
            max_connections: parse_or_default(&lookup, "DATABASE_MAX_CONNECTIONS", "5")?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn or_default<F>(lookup: &F, key: &'static str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn parse_or_default<F, T>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let raw = or_default(lookup, key, default);
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.clone(),
        reason: e.to_string(),
    })
}
