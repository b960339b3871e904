//! Artist and album lookup response types.

use serde::Serialize;
use tunescout_core::AlbumMatch;

/// Response for `GET /artist/{name}`.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistAlbumsResponse {
    /// The normalized search term sent to the provider.
    pub query: String,
    /// Matched albums, at most the configured limit.
    pub albums: Vec<AlbumMatch>,
}

/// Response for `GET /album/{artist_name}/{album_name}`.
pub type AlbumResponse = AlbumMatch;
