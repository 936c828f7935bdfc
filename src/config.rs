// src/config.rs

use std::error::Error;
use std::fmt;
use std::net::SocketAddr;

pub const DEFAULT_LISTINGS_URL: &str =
    "https://webapplication2-old-pond-3577.fly.dev/api/Scholarships";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug)]
pub enum ConfigError {
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value, reason } => {
                write!(f, "{key}={value:?} is invalid: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub listings_url: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
}

impl Config {
    /// Reads `LISTINGS_URL`, `BIND_ADDR` and `MAX_WORKERS` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let listings_url = get("LISTINGS_URL", DEFAULT_LISTINGS_URL);
        url::Url::parse(&listings_url).map_err(|e| ConfigError::Invalid {
            key: "LISTINGS_URL",
            value: listings_url.clone(),
            reason: e.to_string(),
        })?;

        let bind_raw = get("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|e| {
            ConfigError::Invalid {
                key: "BIND_ADDR",
                value: bind_raw.clone(),
                reason: e.to_string(),
            }
        })?;

        let workers_raw = get("MAX_WORKERS", &DEFAULT_MAX_WORKERS.to_string());
        let max_workers = match workers_raw.parse::<usize>() {
            Ok(n) if n > 0 => n,
            Ok(_) => {
                return Err(ConfigError::Invalid {
                    key: "MAX_WORKERS",
                    value: workers_raw,
                    reason: "must be at least 1".to_string(),
                })
            }
            Err(e) => {
                return Err(ConfigError::Invalid {
                    key: "MAX_WORKERS",
                    value: workers_raw,
                    reason: e.to_string(),
                })
            }
        };

        Ok(Self {
            listings_url,
            bind_addr,
            max_workers,
        })
    }
}
