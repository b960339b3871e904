//! Musixmatch lyrics adapter.
//!
//! Calls `matcher.lyrics.get` and maps the nested `message.header.status_code`
//! to lyrics text or nothing. Every failure is logged and collapses to `None`.

use reqwest::Client;
use serde_json::Value;
use tunescout_core::LyricsRequest;

use super::{endpoint, fetch_json};

const LYRICS_METHOD: &str = "matcher.lyrics.get";

/// Status code Musixmatch reports inside the envelope on success.
const PROVIDER_OK: i64 = 200;

#[derive(Debug, Clone)]
pub struct MusixmatchClient {
    http: Client,
    base_url: String,
}

impl MusixmatchClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        MusixmatchClient {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetches lyrics for an already sanitized request.
    ///
    /// Returns `None` when the provider has no lyrics, answers with an error
    /// status, returns a malformed body, or cannot be reached.
    pub async fn fetch_lyrics(&self, request: &LyricsRequest) -> Option<String> {
        let call = self
            .http
            .get(endpoint(&self.base_url, LYRICS_METHOD))
            .query(&[
                ("q_artist", request.artist()),
                ("q_track", request.song()),
                ("apikey", request.api_key()),
            ]);

        match fetch_json(call).await {
            Ok(data) => {
                tracing::debug!(payload = %data, "lyrics provider response");
                extract_lyrics(&data)
            }
            Err(err) => {
                tracing::error!(
                    artist = request.artist(),
                    song = request.song(),
                    "lyrics request failed: {}",
                    err
                );
                None
            }
        }
    }
}

/// Maps a decoded Musixmatch envelope to lyrics text.
///
/// Status 200 yields `message.body.lyrics.lyrics_body` verbatim; missing or
/// empty nested fields, any other status, and list-shaped bodies yield `None`.
pub fn extract_lyrics(data: &Value) -> Option<String> {
    if data.is_array() {
        tracing::error!("unexpected list response from lyrics provider");
        return None;
    }

    let status_code = data
        .pointer("/message/header/status_code")
        .and_then(Value::as_i64);

    match status_code {
        Some(PROVIDER_OK) => {
            let lyrics = data
                .pointer("/message/body/lyrics/lyrics_body")
                .and_then(Value::as_str)
                .filter(|body| !body.is_empty())
                .map(str::to_string);
            if lyrics.is_none() {
                tracing::warn!("lyrics provider reported success without a lyrics body");
            }
            lyrics
        }
        other => {
            tracing::error!(status_code = ?other, "failed to fetch lyrics");
            None
        }
    }
}
