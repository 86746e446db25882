use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub mod keyword_create;
pub mod keyword_delete;
pub mod keyword_edit;
pub mod keyword_fetch;
pub mod keyword_fetch_all;
pub mod keyword_merge;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(keyword_fetch_all::fetch_keywords)
                .post(keyword_create::create_keyword)
                .delete(keyword_delete::delete_keyword),
        )
        .route("/merge", post(keyword_merge::merge_keyword))
        .route(
            "/:id",
            get(keyword_fetch::fetch_keyword).put(keyword_edit::edit_keyword),
        )
}
