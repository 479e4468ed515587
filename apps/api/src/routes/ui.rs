use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// Serves the two-tab form page; it talks to the JSON API below.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
