//! Host configuration parsed from environment variables.
//!
//! All keys are optional; defaults target a local backend on port 5000.
//!
//! - `PORT`: listen port (default 3000)
//! - `API_BASE_URL`: backend origin that `/api/*` is forwarded to
//! - `PROXY_TIMEOUT_SECS`: whole-request timeout for proxied calls (default 30)
//! - `PROXY_CONNECT_TIMEOUT_SECS`: connect timeout (default 5)
//! - `ASSETS_DIR`: static fallback directory (default `public`)

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_ASSETS_DIR: &str = "public";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("API_BASE_URL must be an http(s) origin, got {0:?}")]
    BaseUrl(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub api_base_url: String,
    pub proxy_timeout: Duration,
    pub proxy_connect_timeout: Duration,
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            proxy_timeout: Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
            proxy_connect_timeout: Duration::from_secs(DEFAULT_PROXY_CONNECT_TIMEOUT_SECS),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl ServerConfig {
    /// Read the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a key is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a key is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;
        let api_base_url = match get("API_BASE_URL") {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };
        let timeout = parse_or(get("PROXY_TIMEOUT_SECS"), "PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)?;
        let connect = parse_or(
            get("PROXY_CONNECT_TIMEOUT_SECS"),
            "PROXY_CONNECT_TIMEOUT_SECS",
            DEFAULT_PROXY_CONNECT_TIMEOUT_SECS,
        )?;
        let assets_dir = get("ASSETS_DIR").map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from);

        Ok(Self {
            port,
            api_base_url,
            proxy_timeout: Duration::from_secs(timeout),
            proxy_connect_timeout: Duration::from_secs(connect),
            assets_dir,
        })
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, var: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    let host = trimmed.strip_prefix("http://").or_else(|| trimmed.strip_prefix("https://"));
    match host {
        Some(host) if !host.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::BaseUrl(raw.to_owned())),
    }
}
