use axum::{routing::get, Router};

use crate::AppState;

pub mod keywords;
pub mod root;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::root))
        .nest("/keywords", keywords::router())
}
