//! Domain types shared by the normalizer, the sanitizer and the server.
//!
//! [`ArtistQuery`] and [`LyricsRequest`] can only be built through their
//! validating constructors, so holding one means the input was accepted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::sanitize::sanitize_identifier;

/// A normalized artist lookup: a first name token and an optional second one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistQuery {
    first: String,
    second: String,
}

impl ArtistQuery {
    pub(crate) fn new(first: &str, second: &str) -> Self {
        ArtistQuery {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    /// May be empty for single-word names.
    pub fn second(&self) -> &str {
        &self.second
    }

    /// The term sent to the album provider: both tokens joined by one space,
    /// without a trailing separator when the second token is empty.
    pub fn search_term(&self) -> String {
        if self.second.is_empty() {
            self.first.clone()
        } else {
            format!("{} {}", self.first, self.second)
        }
    }
}

impl fmt::Display for ArtistQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.search_term())
    }
}

/// A validated lyrics lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsRequest {
    artist: String,
    song: String,
    api_key: String,
}

impl LyricsRequest {
    /// Validates and sanitizes the three lookup fields.
    ///
    /// Empty artist or song input is rejected before sanitization; any field
    /// that sanitizes down to nothing is rejected after it.
    pub fn new(artist: &str, song: &str, api_key: &str) -> Result<Self, CoreError> {
        if artist.is_empty() || song.is_empty() {
            return Err(CoreError::invalid_input(
                &format!("{}/{}", artist, song),
                "artist name and song title are required",
            ));
        }

        let sanitized_artist = sanitize_identifier(artist);
        let sanitized_song = sanitize_identifier(song);
        if sanitized_artist.is_empty() || sanitized_song.is_empty() {
            return Err(CoreError::invalid_input(
                &format!("{}/{}", artist, song),
                "invalid artist name or song title",
            ));
        }

        let sanitized_key = sanitize_identifier(api_key);
        if sanitized_key.is_empty() {
            return Err(CoreError::invalid_input(api_key, "api key is required"));
        }

        Ok(LyricsRequest {
            artist: sanitized_artist,
            song: sanitized_song,
            api_key: sanitized_key,
        })
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn song(&self) -> &str {
        &self.song
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Pairs this request with the lyrics text returned for it.
    pub fn into_result(self, lyrics: String) -> LyricsResult {
        LyricsResult {
            artist: self.artist,
            song: self.song,
            lyrics,
        }
    }
}

/// Lyrics found for a sanitized artist/song pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricsResult {
    pub artist: String,
    pub song: String,
    pub lyrics: String,
}

/// One album returned by the album provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumMatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,
    pub collection_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_term_joins_with_single_space() {
        let query = ArtistQuery::new("bon", "jovi");
        assert_eq!(query.search_term(), "bon jovi");
        assert_eq!(query.to_string(), "bon jovi");
    }

    #[test]
    fn search_term_of_single_word_has_no_trailing_space() {
        assert_eq!(ArtistQuery::new("madonna", "").search_term(), "madonna");
    }

    #[test]
    fn lyrics_request_sanitizes_fields() {
        let req = LyricsRequest::new("Guns N' Roses", " Sweet Child O' Mine! ", "abc123").unwrap();
        assert_eq!(req.artist(), "Guns N Roses");
        assert_eq!(req.song(), "Sweet Child O Mine");
        assert_eq!(req.api_key(), "abc123");
    }

    #[test]
    fn lyrics_request_rejects_empty_fields() {
        assert!(LyricsRequest::new("", "Hello", "key").is_err());
        assert!(LyricsRequest::new("Adele", "", "key").is_err());
    }

    #[test]
    fn lyrics_request_rejects_fields_emptied_by_sanitization() {
        let err = LyricsRequest::new("!!!", "Hello", "key").unwrap_err();
        let CoreError::InvalidInput { reason, .. } = err;
        assert_eq!(reason, "invalid artist name or song title");
        assert!(LyricsRequest::new("Adele", "???", "key").is_err());
        assert!(LyricsRequest::new("Adele", "Hello", " '' ").is_err());
    }

    #[test]
    fn into_result_keeps_sanitized_names() {
        let result = LyricsRequest::new("Adele", "Hello", "X")
            .unwrap()
            .into_result("Hello, it's me".to_string());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({
                "artist": "Adele",
                "song": "Hello",
                "lyrics": "Hello, it's me"
            })
        );
    }
}
