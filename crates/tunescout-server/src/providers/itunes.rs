//! iTunes Search API adapter.

use reqwest::Client;
use serde::Deserialize;
use tunescout_core::AlbumMatch;

use super::{endpoint, fetch_json, ProviderError};

/// iTunes Search API response structure
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    #[serde(default)]
    collection_id: Option<u64>,
    #[serde(default)]
    collection_name: Option<String>,
    #[serde(default)]
    artist_name: Option<String>,
    #[serde(default, rename = "artworkUrl100")]
    artwork_url_100: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    track_count: Option<u32>,
    #[serde(default)]
    primary_genre_name: Option<String>,
    #[serde(default)]
    collection_view_url: Option<String>,
}

impl SearchResult {
    /// Results without a collection name are not albums and are dropped.
    fn into_album(self) -> Option<AlbumMatch> {
        Some(AlbumMatch {
            collection_id: self.collection_id,
            collection_name: self.collection_name?,
            artist_name: self.artist_name,
            artwork_url: self.artwork_url_100,
            release_date: self.release_date,
            track_count: self.track_count,
            primary_genre: self.primary_genre_name,
            store_url: self.collection_view_url,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ItunesClient {
    http: Client,
    base_url: String,
}

impl ItunesClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        ItunesClient {
            http,
            base_url: base_url.into(),
        }
    }

    /// Searches albums matching `term`, returning at most `limit` entries.
    pub async fn search_albums(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<AlbumMatch>, ProviderError> {
        tracing::debug!("searching albums via iTunes: term='{}', limit={}", term, limit);

        let limit = limit.to_string();
        let call = self.http.get(endpoint(&self.base_url, "search")).query(&[
            ("term", term),
            ("media", "music"),
            ("entity", "album"),
            ("limit", limit.as_str()),
        ]);

        let data = fetch_json(call).await.map_err(|err| {
            tracing::warn!(term, "iTunes album search failed: {}", err);
            err
        })?;
        let parsed: SearchResponse = serde_json::from_value(data).map_err(|err| {
            tracing::warn!(term, "iTunes response had unexpected shape: {}", err);
            ProviderError::from(err)
        })?;

        Ok(parsed
            .results
            .into_iter()
            .filter_map(SearchResult::into_album)
            .collect())
    }

    /// Looks up a single album by artist and album name.
    ///
    /// Returns `Ok(None)` when the provider has no match.
    pub async fn find_album(
        &self,
        artist_name: &str,
        album_name: &str,
    ) -> Result<Option<AlbumMatch>, ProviderError> {
        let term = format!("{} {}", artist_name, album_name);
        let albums = self.search_albums(&term, 1).await?;
        if albums.is_empty() {
            tracing::debug!("no album found for: {} - {}", artist_name, album_name);
        }
        Ok(albums.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn maps_itunes_fields_to_album_match() {
        let data = json!({
            "resultCount": 2,
            "results": [
                {
                    "wrapperType": "collection",
                    "collectionId": 1440843519u64,
                    "collectionName": "Slippery When Wet",
                    "artistName": "Bon Jovi",
                    "artworkUrl100": "https://is1-ssl.mzstatic.com/image/100x100bb.jpg",
                    "releaseDate": "1986-08-18T07:00:00Z",
                    "trackCount": 10,
                    "primaryGenreName": "Rock",
                    "collectionViewUrl": "https://music.apple.com/us/album/1440843519"
                },
                { "wrapperType": "artist", "artistName": "Bon Jovi" }
            ]
        });

        let parsed: SearchResponse = serde_json::from_value(data).unwrap();
        let albums: Vec<AlbumMatch> = parsed
            .results
            .into_iter()
            .filter_map(SearchResult::into_album)
            .collect();

        assert_eq!(albums.len(), 1);
        let album = &albums[0];
        assert_eq!(album.collection_id, Some(1440843519));
        assert_eq!(album.collection_name, "Slippery When Wet");
        assert_eq!(album.artist_name.as_deref(), Some("Bon Jovi"));
        assert_eq!(
            album.artwork_url.as_deref(),
            Some("https://is1-ssl.mzstatic.com/image/100x100bb.jpg")
        );
        assert_eq!(album.track_count, Some(10));
        assert_eq!(album.primary_genre.as_deref(), Some("Rock"));
    }

    #[test]
    fn missing_results_field_is_empty() {
        let parsed: SearchResponse = serde_json::from_value(json!({ "resultCount": 0 })).unwrap();
        assert!(parsed.results.is_empty());
    }
}
