//! Front-end serving routes
//!
//! The page and script are embedded at compile time.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../ui/index.html");
const SCRIPT_JS: &str = include_str!("../ui/script.js");

/// GET /
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/js/script.js
pub async fn serve_script() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        SCRIPT_JS,
    )
        .into_response()
}
