//! Application state shared by all handlers.
//!
//! [`AppState`] holds the immutable configuration and the two provider
//! adapters behind `Arc`s. There is no shared mutable state: each request
//! performs at most one outbound call and nothing is cached between requests.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::providers::{build_http_client, ItunesClient, MusixmatchClient};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Album lookups.
    pub itunes: Arc<ItunesClient>,
    /// Lyrics lookups.
    pub musixmatch: Arc<MusixmatchClient>,
}

impl AppState {
    /// Creates a new `AppState`, building one HTTP client with the configured
    /// timeout for both providers.
    ///
    /// Fails only when the TLS backend cannot be initialized.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = build_http_client(config.http_timeout)?;

        let itunes = ItunesClient::new(http.clone(), config.itunes_base_url.clone());
        let musixmatch = MusixmatchClient::new(http, config.musixmatch_base_url.clone());

        Ok(AppState {
            config: Arc::new(config),
            itunes: Arc::new(itunes),
            musixmatch: Arc::new(musixmatch),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn new_shares_config_with_handlers() {
        let config = ServerConfig {
            http_timeout: Duration::from_secs(1),
            artist_album_limit: 5,
            ..ServerConfig::default()
        };
        let state = AppState::new(config).unwrap();
        assert_eq!(state.config.artist_album_limit, 5);
        assert_eq!(state.config.http_timeout, Duration::from_secs(1));
    }
}
