//! Lyrics lookup request/response types.

use serde::Deserialize;

/// Query string of `GET /lyrics/{artist_name}/{song_title}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LyricsQuery {
    /// Musixmatch API key. A missing key is rejected by the handler.
    pub api_key: Option<String>,
}

/// Response for a successful lyrics lookup: `{artist, song, lyrics}`.
pub type LyricsResponse = tunescout_core::LyricsResult;
