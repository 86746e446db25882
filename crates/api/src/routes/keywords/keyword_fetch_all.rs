use axum::{extract::State, Json};
use keywords_database::Keyword;
use keywords_models::v0;
use keywords_result::Result;

use crate::{util::extract::QueryOptions, AppState};

/// Fetch a page of keywords
///
/// Keywords are returned in creation order, optionally only those for one username.
#[utoipa::path(
    get,
    path = "/api/keywords",
    tag = "Keywords",
    params(v0::OptionsFetchKeywords),
    responses(
        (status = 200, description = "Page of keywords", body = v0::KeywordsPage),
        (status = 400, description = "Malformed paging parameters"),
    )
)]
pub async fn fetch_keywords(
    State(state): State<AppState>,
    QueryOptions(options): QueryOptions<v0::OptionsFetchKeywords>,
) -> Result<Json<v0::KeywordsPage>> {
    let page = options.page();
    let limit = options.limit(state.default_page_size);
    let username = options
        .username
        .as_deref()
        .filter(|username| !username.is_empty());

    let (keywords, total_pages) =
        Keyword::fetch_page(&state.database, username, page, limit).await?;

    Ok(Json(v0::KeywordsPage {
        keywords: keywords.into_iter().map(Into::into).collect(),
        total_pages,
    }))
}
