use axum::{extract::State, http::StatusCode, Json};
use keywords_database::{Database, Keyword};
use keywords_models::v0;
use keywords_result::Result;

use crate::util::extract::ValidatedJson;

/// Merge channel names into a username's keyword
///
/// Appends names not already present to the oldest keyword for the username,
/// or creates a keyword when the username has none.
#[utoipa::path(
    post,
    path = "/api/keywords/merge",
    tag = "Keywords",
    request_body = v0::DataMergeKeyword,
    responses(
        (status = 200, description = "Channels merged into an existing keyword", body = v0::Keyword),
        (status = 201, description = "Keyword created", body = v0::Keyword),
        (status = 400, description = "Missing username or invalid channel names"),
    )
)]
pub async fn merge_keyword(
    State(db): State<Database>,
    ValidatedJson(data): ValidatedJson<v0::DataMergeKeyword>,
) -> Result<(StatusCode, Json<v0::Keyword>)> {
    let (keyword, created) = Keyword::merge(&db, data.username, data.channels).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    tracing::info!(
        "Merged channels into keyword {} ({} channels)",
        keyword.id,
        keyword.channelcount
    );
    Ok((status, Json(keyword.into())))
}
