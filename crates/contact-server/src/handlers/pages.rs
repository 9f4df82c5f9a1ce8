//! Static pages

use axum::response::Html;

/// The contact form itself, embedded at compile time.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
