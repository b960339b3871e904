//! Lyrics lookup handler.

use axum::extract::{Path, Query, State};
use axum::Json;
use tunescout_core::LyricsRequest;

use crate::error::ApiError;
use crate::schema::lyrics::{LyricsQuery, LyricsResponse};
use crate::state::AppState;

/// Fetches lyrics for a song.
///
/// `GET /lyrics/{artist_name}/{song_title}?api_key=...`
///
/// Invalid identifiers yield 400; anything the provider cannot answer
/// yields 404.
pub async fn get_lyrics(
    State(state): State<AppState>,
    Path((artist_name, song_title)): Path<(String, String)>,
    Query(query): Query<LyricsQuery>,
) -> Result<Json<LyricsResponse>, ApiError> {
    let api_key = query
        .api_key
        .ok_or_else(|| ApiError::BadRequest("api_key query parameter is required".to_string()))?;
    let request = LyricsRequest::new(&artist_name, &song_title, &api_key)?;

    match state.musixmatch.fetch_lyrics(&request).await {
        Some(lyrics) => Ok(Json(request.into_result(lyrics))),
        None => Err(ApiError::NotFound("Lyrics not found".to_string())),
    }
}
