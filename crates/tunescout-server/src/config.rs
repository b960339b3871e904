//! Server configuration read from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `TUNESCOUT_HOST` | `0.0.0.0` |
//! | `TUNESCOUT_PORT` | `8000` |
//! | `MUSIXMATCH_API_BASE_URL` | `https://api.musixmatch.com/ws/1.1/` |
//! | `ITUNES_API_BASE_URL` | `https://itunes.apple.com` |
//! | `TUNESCOUT_HTTP_TIMEOUT_SECS` | `10` |
//! | `TUNESCOUT_ARTIST_LIMIT` | `3` |
//!
//! Blank values are treated as unset.

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_MUSIXMATCH_BASE_URL: &str = "https://api.musixmatch.com/ws/1.1/";
pub const DEFAULT_ITUNES_BASE_URL: &str = "https://itunes.apple.com";

/// Configuration errors raised at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}' ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime configuration for the HTTP server and its provider adapters.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub musixmatch_base_url: String,
    pub itunes_base_url: String,
    /// Applied to every outbound provider request.
    pub http_timeout: Duration,
    /// Maximum number of albums returned by an artist lookup.
    pub artist_album_limit: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
            musixmatch_base_url: DEFAULT_MUSIXMATCH_BASE_URL.to_string(),
            itunes_base_url: DEFAULT_ITUNES_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(10),
            artist_album_limit: 3,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = ServerConfig::default();

        let timeout_secs: u64 = parse_positive(
            "TUNESCOUT_HTTP_TIMEOUT_SECS",
            get("TUNESCOUT_HTTP_TIMEOUT_SECS"),
            defaults.http_timeout.as_secs(),
        )?;

        Ok(ServerConfig {
            host: get("TUNESCOUT_HOST").unwrap_or(defaults.host),
            port: parse_positive("TUNESCOUT_PORT", get("TUNESCOUT_PORT"), defaults.port)?,
            musixmatch_base_url: get("MUSIXMATCH_API_BASE_URL")
                .unwrap_or(defaults.musixmatch_base_url),
            itunes_base_url: get("ITUNES_API_BASE_URL").unwrap_or(defaults.itunes_base_url),
            http_timeout: Duration::from_secs(timeout_secs),
            artist_album_limit: parse_positive(
                "TUNESCOUT_ARTIST_LIMIT",
                get("TUNESCOUT_ARTIST_LIMIT"),
                defaults.artist_album_limit,
            )?,
        })
    }

    /// The `host:port` pair the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_positive<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialEq + Default,
    T::Err: std::fmt::Display,
{
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|err| ConfigError::InvalidValue {
            var,
            value: raw.clone(),
            reason: err.to_string(),
        })?;
    if value == T::default() {
        return Err(ConfigError::InvalidValue {
            var,
            value: raw,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}
