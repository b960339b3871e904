//! Home page handler.

use axum::response::Html;

/// Serves the static home page.
///
/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
