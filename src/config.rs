// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid URL: {reason}")]
    InvalidUrl { key: &'static str, reason: String },

    #[error("{key} has an invalid value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: Url,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub page_size: u32,
    pub api_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            bind_addr: DEFAULT_BIND_ADDR.parse().expect("default bind address is valid"),
            max_workers: DEFAULT_MAX_WORKERS,
            page_size: DEFAULT_PAGE_SIZE,
            api_timeout: None,
        }
    }
}

impl Config {
    /// Reads settings from the process environment (after `.env`, if any).
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();

        if let Some(raw) = lookup("LISTINGS_API_URL") {
            cfg.api_base_url = parse_api_url(&raw)?;
        }

        if let Some(raw) = lookup("BIND_ADDR") {
            cfg.bind_addr = raw.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    key: "BIND_ADDR",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(raw) = lookup("MAX_WORKERS") {
            cfg.max_workers = parse_in_range("MAX_WORKERS", &raw, 1, 1024)?;
        }

        if let Some(raw) = lookup("PAGE_SIZE") {
            cfg.page_size = parse_in_range("PAGE_SIZE", &raw, 1, MAX_PAGE_SIZE as usize)? as u32;
        }

        if let Some(raw) = lookup("API_TIMEOUT_SECS") {
            let secs = parse_in_range("API_TIMEOUT_SECS", &raw, 1, 3600)?;
            cfg.api_timeout = Some(Duration::from_secs(secs as u64));
        }

        Ok(cfg)
    }
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        key: "LISTINGS_API_URL",
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other:?}"))),
    }
}

fn parse_in_range(
    key: &'static str,
    raw: &str,
    min: usize,
    max: usize,
) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
        reason,
    };

    let n: usize = raw
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid(e.to_string()))?;
    if n < min || n > max {
        return Err(invalid(format!("must be between {min} and {max}")));
    }
    Ok(n)
}
