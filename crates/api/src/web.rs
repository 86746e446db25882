use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::AppState;

static INDEX_HTML: &str = include_str!("../public/index.html");
static DETAILS_HTML: &str = include_str!("../public/details.html");
static SCRIPT_JS: &str = include_str!("../public/script.js");
static STYLE_CSS: &str = include_str!("../public/style.css");

pub static CACHE_CONTROL: &str = "no-cache";

/// Static front-end pages
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/details.html", get(details))
        .route("/script.js", get(script))
        .route("/style.css", get(style))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn details() -> Html<&'static str> {
    Html(DETAILS_HTML)
}

async fn script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        SCRIPT_JS,
    )
}

async fn style() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        STYLE_CSS,
    )
}
