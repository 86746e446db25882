use axum::{extract::State, http::StatusCode, Json};
use keywords_database::{Database, Keyword};
use keywords_models::v0;
use keywords_result::Result;

use crate::util::extract::ValidatedJson;

/// Create a new keyword
///
/// Usernames are not unique, every call creates a new record.
#[utoipa::path(
    post,
    path = "/api/keywords",
    tag = "Keywords",
    request_body = v0::DataCreateKeyword,
    responses(
        (status = 201, description = "Created keyword", body = v0::Keyword),
        (status = 400, description = "Missing username or invalid channels"),
    )
)]
pub async fn create_keyword(
    State(db): State<Database>,
    ValidatedJson(data): ValidatedJson<v0::DataCreateKeyword>,
) -> Result<(StatusCode, Json<v0::Keyword>)> {
    let keyword = Keyword::create(
        &db,
        data.username,
        data.channels.into_iter().map(Into::into).collect(),
    )
    .await?;

    tracing::info!("Created keyword {} for {}", keyword.id, keyword.username);
    Ok((StatusCode::CREATED, Json(keyword.into())))
}
