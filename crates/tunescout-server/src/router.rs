//! Router assembly for the tunescout HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/artist/{name}", get(handlers::artist::get_artist))
        .route(
            "/album/{artist_name}/{album_name}",
            get(handlers::artist::get_album),
        )
        .route(
            "/lyrics/{artist_name}/{song_title}",
            get(handlers::lyrics::get_lyrics),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
