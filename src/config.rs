use crate::infrastructure::coingecko::DEFAULT_TRENDING_URL;
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Live,
    Mock,
}

impl std::str::FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "live" => Ok(Mode::Live),
            "mock" => Ok(Mode::Mock),
            _ => anyhow::bail!("Invalid MODE: {}. Must be 'live' or 'mock'", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    /// Prediction service root; `/predict` is appended. No trailing slash.
    pub api_base_url: String,
    pub coin_directory_url: String,
    pub http_timeout: Duration,
    pub http_connect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Live,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            coin_directory_url: DEFAULT_TRENDING_URL.to_string(),
            http_timeout: Duration::from_secs(30),
            http_connect_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let mode = Mode::from_str(&get("MODE", "live"))?;

        let api_base_url = validate_http_url("API_BASE_URL", &get("API_BASE_URL", DEFAULT_API_BASE_URL))?;
        let coin_directory_url =
            validate_http_url("COIN_DIRECTORY_URL", &get("COIN_DIRECTORY_URL", DEFAULT_TRENDING_URL))?;

        let http_timeout_secs = get("HTTP_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .context("Failed to parse HTTP_TIMEOUT_SECS")?;

        let http_connect_timeout_secs = get("HTTP_CONNECT_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .context("Failed to parse HTTP_CONNECT_TIMEOUT_SECS")?;

        if http_timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            mode,
            api_base_url,
            coin_directory_url,
            http_timeout: Duration::from_secs(http_timeout_secs),
            http_connect_timeout: Duration::from_secs(http_connect_timeout_secs.max(1)),
        })
    }
}

fn validate_http_url(key: &str, raw: &str) -> Result<String> {
    let parsed = Url::parse(raw).with_context(|| format!("Failed to parse {} '{}'", key, raw))?;
    match parsed.scheme() {
        "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
        other => anyhow::bail!("{} must use http or https, got '{}'", key, other),
    }
}
