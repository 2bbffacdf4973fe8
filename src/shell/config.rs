// Process settings read from the environment (and a `.env` file when present).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("{host}:{port} is not a socket address")]
    Address { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Directory of the file store. In-memory storage when absent.
    pub storage_dir: Option<PathBuf>,
    pub require_location: bool,
    pub tick_interval: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match read("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value })?,
            None => DEFAULT_PORT,
        };
        let require_location = match read("REQUIRE_LOCATION") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                key: "REQUIRE_LOCATION",
                value,
            })?,
            None => false,
        };
        let tick_interval_ms = match read("TICK_INTERVAL_MS") {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::Invalid {
                    key: "TICK_INTERVAL_MS",
                    value,
                })?,
            None => DEFAULT_TICK_INTERVAL_MS,
        };

        Ok(Self {
            host: read("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            storage_dir: read("STORAGE_DIR").map(PathBuf::from),
            require_location,
            tick_interval: Duration::from_millis(tick_interval_ms),
        })
    }

    pub fn address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Address {
                host: self.host.clone(),
                port: self.port,
            })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
