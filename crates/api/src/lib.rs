use axum::{extract::FromRef, Router};
use keywords_database::Database;
use keywords_result::{create_error, Error};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

pub mod routes;
pub mod util;
mod web;

#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    /// Page size used when a list request has none
    pub default_page_size: u64,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::root::root,
        routes::keywords::keyword_fetch_all::fetch_keywords,
        routes::keywords::keyword_fetch::fetch_keyword,
        routes::keywords::keyword_create::create_keyword,
        routes::keywords::keyword_edit::edit_keyword,
        routes::keywords::keyword_delete::delete_keyword,
        routes::keywords::keyword_merge::merge_keyword,
    ),
    tags(
        (name = "Misc", description = "Service information."),
        (name = "Keywords", description = "Usernames and their channels.")
    ),
    components(schemas(
        keywords_models::v0::Keyword,
        keywords_models::v0::Channel,
        keywords_models::v0::DataChannel,
        keywords_models::v0::DataCreateKeyword,
        keywords_models::v0::DataEditKeyword,
        keywords_models::v0::DataMergeKeyword,
        keywords_models::v0::KeywordsPage,
        keywords_models::v0::Acknowledgement,
        routes::root::RootResponse,
    ))
)]
pub struct ApiDoc;

/// Any path nothing else matched
async fn fallback() -> Error {
    create_error!(UnknownRoute)
}

/// Build the complete application: API, docs and front-end
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(web::router())
        .nest("/api", routes::router())
        .fallback(fallback)
        .layer(util::panic::catch_panic_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
