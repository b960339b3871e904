//! Artist and album lookup handlers.

use axum::extract::{Path, State};
use axum::Json;
use tunescout_core::normalize_artist_name;

use crate::error::ApiError;
use crate::schema::artist::{AlbumResponse, ArtistAlbumsResponse};
use crate::state::AppState;

/// Lists albums for a free-form artist name.
///
/// Provider failures are logged by the adapter; callers only see a 404.
///
/// `GET /artist/{name}`
pub async fn get_artist(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ArtistAlbumsResponse>, ApiError> {
    let query = normalize_artist_name(&name)?;
    let term = query.search_term();

    let albums = state
        .itunes
        .search_albums(&term, state.config.artist_album_limit)
        .await
        .map_err(|_| ApiError::NotFound("Artist not found".to_string()))?;

    tracing::info!(artist = %term, count = albums.len(), "artist lookup");
    Ok(Json(ArtistAlbumsResponse {
        query: term,
        albums,
    }))
}

/// Returns the best album match for an artist/album pair.
///
/// `GET /album/{artist_name}/{album_name}`
pub async fn get_album(
    State(state): State<AppState>,
    Path((artist_name, album_name)): Path<(String, String)>,
) -> Result<Json<AlbumResponse>, ApiError> {
    let artist_name = artist_name.trim();
    let album_name = album_name.trim();
    if artist_name.is_empty() || album_name.is_empty() {
        return Err(ApiError::BadRequest(
            "artist name and album name are required".to_string(),
        ));
    }

    state
        .itunes
        .find_album(artist_name, album_name)
        .await
        .map_err(|_| ApiError::NotFound("Album not found".to_string()))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Album not found".to_string()))
}
